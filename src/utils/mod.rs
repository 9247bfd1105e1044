pub mod avatar;
pub mod email;
pub mod password;
pub mod prize;

pub use avatar::default_avatar_url;
pub use email::{normalize_email, validate_email};
pub use password::{hash_password, validate_password, verify_password};
pub use prize::random_scratch_prize;
