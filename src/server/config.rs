//! Environment configuration.
//!
//! `main` loads `.env` with dotenvy before calling [`Config::from_env`].

use std::net::SocketAddr;

use crate::server::{error::config::ConfigError, model::auth::DEFAULT_JWT_AUDIENCE};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// Shared secret the auth provider signs access tokens with
    pub jwt_secret: String,
    pub jwt_audience: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, used by [`Config::from_env`].
    ///
    /// Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            optional(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let bind_address = optional("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_audience: optional("JWT_AUDIENCE")
                .unwrap_or_else(|| DEFAULT_JWT_AUDIENCE.to_string()),
            bind_address,
        })
    }
}
