pub mod password_hash;
pub mod user_id;
pub mod user_name;

pub use password_hash::PasswordHash;
pub use user_id::UserId;
pub use user_name::{UserName, UserNameError};
