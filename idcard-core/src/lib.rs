//! Service layer of the ID-card request desk.
//!
//! An admin signs in through the [`AuthService`](service::auth_service::AuthService),
//! then works on the pending and printed request collections held by the
//! [`RequestService`](service::request_service::RequestService). Both talk to
//! the backend through the `idcard-providers` crate.
//!
//! ```ignore rust
//! let core = IdCardCore::from_env(Some("localhost"), Arc::new(ReqwestClient::default()))?;
//!
//! core.auth_service.login("admin1").await?;
//! core.request_service.initial_load().await;
//! ```

use std::sync::Arc;

use config::{ApiConfig, ConfigError};
use idcard_providers::http_client::imp::reqwest_client::ReqwestClient;
use idcard_providers::http_client::HttpClient;
use idcard_providers::remote_api::{imp::http::HttpIdCardApi, IdCardApi};
use service::{auth_service::AuthService, request_service::RequestService};

pub mod config;
pub mod display;
pub mod model;
pub mod service;

pub struct IdCardCore {
    pub config: ApiConfig,
    pub auth_service: AuthService,
    pub request_service: RequestService,
}

impl Default for IdCardCore {
    fn default() -> Self {
        Self::new(None, Arc::new(ReqwestClient::default()))
    }
}

impl IdCardCore {
    /// `None` targets the production backend.
    pub fn new(config: Option<ApiConfig>, client: Arc<dyn HttpClient>) -> Self {
        let config = config.unwrap_or_default();

        let api: Arc<dyn IdCardApi> = Arc::new(HttpIdCardApi::new(&config.base_url, client));

        Self {
            auth_service: AuthService::new(api.clone()),
            request_service: RequestService::new(api),
            config,
        }
    }

    /// Resolves the base URL once from the environment and the serving host.
    pub fn from_env(host: Option<&str>, client: Arc<dyn HttpClient>) -> Result<Self, ConfigError> {
        let config = ApiConfig::from_env(host)?;
        tracing::info!(base_url = %config.base_url, "using ID card backend");

        Ok(Self::new(Some(config), client))
    }
}
