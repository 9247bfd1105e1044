pub mod rpc;

pub use rpc::BaseRpcClient;
