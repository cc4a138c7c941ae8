//! Request extractors
//!
//! Thin wrappers over axum's `Json` and `Query` whose rejections are
//! rendered as `AppError` (422 with the parser's message) instead of
//! axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::app_error::AppError;

/// JSON body that fails with 422 on a schema mismatch
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// Query string that fails with 422 on a missing or malformed parameter
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);
