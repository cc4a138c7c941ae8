//! Credential Store Service
//!
//! Typed access to the settings table for the provider integrations.
//! Every lookup of a missing key fails with [`KvError::NotConfigured`],
//! which is how an integration reports "credentials not yet supplied".

use std::fmt;
use std::sync::Arc;

use crate::domain::entity::KvEntry;
use crate::domain::repository::KvRepository;
use crate::domain::setting_key::SettingKey;
use crate::error::{KvError, KvResult};

/// Compute provider API key pair
#[derive(Clone, PartialEq, Eq)]
pub struct TencentCredentials {
    pub secret_id: String,
    pub secret_key: String,
}

impl fmt::Debug for TencentCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TencentCredentials")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Credential store over any settings repository
pub struct CredentialStore<R> {
    repo: Arc<R>,
}

impl<R> Clone for CredentialStore<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R> CredentialStore<R>
where
    R: KvRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Value of a known setting, or `NotConfigured` with that setting's message
    pub async fn require(&self, key: SettingKey) -> KvResult<String> {
        self.repo
            .find_value(key.as_str())
            .await?
            .ok_or(KvError::NotConfigured(key.missing_message()))
    }

    /// Both compute provider keys; either one missing is the same failure
    pub async fn tencent_credentials(&self) -> KvResult<TencentCredentials> {
        let secret_id = self.require(SettingKey::TencentSecretId).await?;
        let secret_key = self.require(SettingKey::TencentSecretKey).await?;
        Ok(TencentCredentials {
            secret_id,
            secret_key,
        })
    }

    /// Generic write of any key
    pub async fn upsert(&self, key: &str, value: &str) -> KvResult<KvEntry> {
        let entry = self.repo.upsert(key, value).await?;

        match SettingKey::parse(key) {
            Some(known) if !known.is_secret() => {
                tracing::info!(key = %key, value = %value, "Setting updated");
            }
            _ => tracing::info!(key = %key, "Setting updated"),
        }

        Ok(entry)
    }

    /// Write a known setting
    pub async fn set(&self, key: SettingKey, value: &str) -> KvResult<KvEntry> {
        self.upsert(key.as_str(), value).await
    }
}
