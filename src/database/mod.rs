pub mod connection;

pub use connection::{DbPool, backend_name, create_pool, run_migrations};
