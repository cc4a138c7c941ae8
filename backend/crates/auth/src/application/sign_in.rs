//! Sign In Use Case
//!
//! Checks a username/password pair and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::issue_token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, UserName};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub user_id: UserId,
    /// Bearer token for the `token` header
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A name that could never have been registered is just a miss
        let user_name =
            UserName::new(input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(&input.password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(user.id, &self.config.token_secret);

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SignInOutput {
            user_id: user.id,
            token,
        })
    }
}
