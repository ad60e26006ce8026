//! API server configuration.

use thiserror::Error;

/// Configuration errors surfaced at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET (or AUTH_SECRET) must be set; refusing to start without a signing secret")]
    MissingJwtSecret,
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// JWT signing secret. Externally supplied, no fallback value: tokens
    /// signed with a guessable default would defeat the whole identity
    /// module.
    pub jwt_secret: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable                     | Default          |
    /// |------------------------------|------------------|
    /// | `BIND_ADDR`                  | `127.0.0.1:3100` |
    /// | `JWT_SECRET` / `AUTH_SECRET` | none — required  |
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = read_secret().ok_or(ConfigError::MissingJwtSecret)?;
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3100".into()),
            jwt_secret,
        })
    }
}

/// `JWT_SECRET` → `AUTH_SECRET`, skipping empty values.
fn read_secret() -> Option<String> {
    ["JWT_SECRET", "AUTH_SECRET"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|secret| !secret.is_empty())
}
