//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use kernel::extract::{ValidJson, ValidQuery};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{CredentialsRequest, MessageResponse, RegisterQuery};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /auth/login
///
/// Responds with the bearer token as a bare JSON string.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<CredentialsRequest>,
) -> AuthResult<Json<String>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(output.token))
}

/// POST /auth/register?token=<server secret>
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ValidQuery(query): ValidQuery<RegisterQuery>,
    ValidJson(req): ValidJson<CredentialsRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(SignUpInput {
            registration_secret: query.token,
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}
