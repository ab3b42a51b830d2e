//! Resolution of the backend base URL.

use thiserror::Error;
use url::Url;

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "IDCARD_API_URL";
pub const LOCAL_API_URL: &str = "http://localhost:5000";
pub const PRODUCTION_API_URL: &str = "https://adminloadtimefix-backend.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: PRODUCTION_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Picks the base URL: an explicit non-blank value first, then the local
    /// backend when served from `localhost`, otherwise production.
    pub fn resolve(explicit: Option<&str>, host: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = match explicit.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => url,
            None if host.is_some_and(|host| host == "localhost") => LOCAL_API_URL,
            None => PRODUCTION_API_URL,
        };

        Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Same as [`ApiConfig::resolve`] with the explicit value read from
    /// [`API_URL_ENV`].
    pub fn from_env(host: Option<&str>) -> Result<Self, ConfigError> {
        let explicit = std::env::var(API_URL_ENV).ok();
        Self::resolve(explicit.as_deref(), host)
    }
}
