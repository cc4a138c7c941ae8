//! User Name Value Object
//!
//! ユーザー名はログインに使う一意な識別子。管理者アカウント一件のみを想定し、
//! 正規化や予約語チェックは行わない（入力をそのまま保存・照合する）。
//!
//! ## 不変条件
//! - 長さ: 1〜50文字（`users.username` 列の上限）
//! - 制御文字を含まない

use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// User name validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserNameError {
    #[error("user name must not be empty")]
    Empty,
    #[error("user name must be at most {USER_NAME_MAX_LENGTH} characters")]
    TooLong,
    #[error("user name must not contain control characters")]
    ControlCharacter,
}

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate user input
    pub fn new(value: impl Into<String>) -> Result<Self, UserNameError> {
        let value = value.into();

        if value.is_empty() {
            return Err(UserNameError::Empty);
        }
        if value.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }
        if value.chars().any(char::is_control) {
            return Err(UserNameError::ControlCharacter);
        }

        Ok(Self(value))
    }

    /// Rebuild from a stored row without re-validating
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
