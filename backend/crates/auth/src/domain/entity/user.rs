//! User Entity
//!
//! The operator account. There is no profile data beyond the credentials.

use crate::domain::value_object::{PasswordHash, UserId, UserName};

/// Persisted user row
#[derive(Debug, Clone)]
pub struct User {
    /// Auto-assigned integer key, embedded in issued tokens
    pub id: UserId,
    /// Unique login name
    pub user_name: UserName,
    /// Unsalted SHA-256 hex of the password
    pub password_hash: PasswordHash,
}

impl User {
    /// Check a plaintext password against the stored hash
    pub fn verify_password(&self, plaintext: &str) -> bool {
        self.password_hash.verify(plaintext)
    }
}

/// User about to be inserted; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password_hash: PasswordHash,
}

impl NewUser {
    pub fn new(user_name: UserName, plaintext_password: &str) -> Self {
        Self {
            user_name,
            password_hash: PasswordHash::from_plaintext(plaintext_password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_hashes_password() {
        let user_name = UserName::new("admin").unwrap();
        let new_user = NewUser::new(user_name.clone(), "secret");

        let user = User {
            id: UserId::from_i32(1),
            user_name,
            password_hash: new_user.password_hash,
        };

        assert!(user.verify_password("secret"));
        assert!(!user.verify_password("Secret"));
    }
}
