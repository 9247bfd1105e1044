pub mod common;
pub mod ko_ticket;
pub mod lottery;
pub mod pagination;
pub mod stats;
pub mod ticket;
pub mod transaction;
pub mod user;
pub mod wallet;
pub mod webhook;

pub use common::*;
pub use ko_ticket::*;
pub use lottery::*;
pub use pagination::*;
pub use stats::*;
pub use ticket::*;
pub use transaction::*;
pub use user::*;
pub use wallet::*;
pub use webhook::*;
