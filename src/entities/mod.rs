pub mod ko_tickets;
pub mod lotteries;
pub mod tickets;
pub mod transactions;
pub mod users;

pub use ko_tickets as ko_ticket_entity;
pub use lotteries as lottery_entity;
pub use tickets as ticket_entity;
pub use transactions as transaction_entity;
pub use users as user_entity;

pub use lotteries::LotteryStatus;
pub use transactions::{TransactionStatus, TransactionType};
