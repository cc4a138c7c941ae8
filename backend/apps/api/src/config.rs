//! Process Configuration
//!
//! Read once at startup from the environment (after `.env`). Any missing
//! required variable or unparsable value aborts startup.

use anyhow::{Context, Result};
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct AppConfig {
    /// Signs bearer tokens and gates registration
    pub token_secret: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Put the token guard in front of `/domain` as well
    pub protect_domain_routes: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| lookup(name).with_context(|| format!("{name} must be set"));

        Ok(Self {
            token_secret: required("TOKEN_SECRET")?,
            db_host: required("DB_HOST")?,
            db_user: required("DB_USER")?,
            db_pass: required("DB_PASS")?,
            db_name: required("DB_NAME")?,
            db_port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            db_max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                DEFAULT_DB_MAX_CONNECTIONS,
            )?,
            bind_addr: match lookup("BIND_ADDR") {
                Some(addr) => parse("BIND_ADDR", &addr)?,
                None => parse("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            },
            protect_domain_routes: parse_or(&lookup, "PROTECT_DOMAIN_ROUTES", false)?,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_pass)
            .database(&self.db_name)
    }
}

fn parse<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{name} has an invalid value: {raw:?}"))
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => parse(name, &raw),
        None => Ok(default),
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("token_secret", &"<redacted>")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_pass", &"<redacted>")
            .field("db_name", &self.db_name)
            .field("db_max_connections", &self.db_max_connections)
            .field("bind_addr", &self.bind_addr)
            .field("protect_domain_routes", &self.protect_domain_routes)
            .finish()
    }
}
