pub mod auth_service;
pub mod lottery_service;
pub mod scratch_service;
pub mod stats_service;
pub mod transaction_service;
pub mod user_service;

pub use auth_service::*;
pub use lottery_service::*;
pub use scratch_service::*;
pub use stats_service::*;
pub use transaction_service::*;
pub use user_service::*;
