// src/config.rs

use crate::error::ConfigError;
use std::env;
use url::Url;

/// Where created users are POSTed unless overridden.
pub const DEFAULT_ENDPOINT: &str = "https://example.com/api/create_user";

/// Environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV: &str = "USERCREATE_ENDPOINT";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_endpoint(env::var(ENDPOINT_ENV).ok().as_deref())
    }

    /// Build a config from an optional endpoint override; blank values fall
    /// back to the default.
    pub fn from_endpoint(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        let endpoint = Url::parse(value).map_err(|source| ConfigError::InvalidEndpoint {
            value: value.to_string(),
            source,
        })?;
        Ok(Self { endpoint })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint should parse"),
        }
    }
}
