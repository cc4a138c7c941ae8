//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::UserName;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user; a taken user name fails at the storage level
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by exact user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}
