pub mod auth;
pub mod diagnostic;
pub mod ko_ticket;
pub mod lottery;
pub mod stats;
pub mod user;
pub mod webhook;

pub use auth::auth_config;
pub use diagnostic::diagnostic_config;
pub use ko_ticket::ko_ticket_config;
pub use lottery::lottery_config;
pub use stats::stats_config;
pub use user::user_config;
pub use webhook::webhook_config;
