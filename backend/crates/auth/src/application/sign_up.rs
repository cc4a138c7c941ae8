//! Sign Up Use Case
//!
//! Creates a user when the caller presents the shared server secret.

use std::sync::Arc;

use platform::crypto::constant_time_eq;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, UserName};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    /// Must equal the server's token secret
    pub registration_secret: String,
    pub user_name: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        if !constant_time_eq(
            input.registration_secret.as_bytes(),
            self.config.token_secret.as_bytes(),
        ) {
            return Err(AuthError::InvalidRegistrationSecret);
        }

        let user_name = UserName::new(input.user_name)
            .map_err(|e| AuthError::InvalidUsername(e.to_string()))?;

        // No existence pre-check: a duplicate name fails on the unique index
        let user = self
            .user_repo
            .create(&NewUser::new(user_name, &input.password))
            .await?;

        tracing::info!(
            user_id = %user.id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(SignUpOutput { user_id: user.id })
    }
}
