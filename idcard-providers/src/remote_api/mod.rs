//! The remote ID-card backend.
//!
//! All four operations are plain JSON calls against a single base URL. The
//! endpoint serving pending requests is named `/api/printed` by the backend;
//! that name stays confined to this module.

use async_trait::async_trait;

use crate::{
    common_models::id_card_request::{
        AcceptConfirmation, LoginOutcome, PromotionPayload, StudentIdRequest,
    },
    remote_api::error::RemoteApiError,
};

pub mod dto;
pub mod error;
pub mod imp;
pub mod mapper;

pub const LOGIN_PATH: &str = "/api/login";
pub const PENDING_REQUESTS_PATH: &str = "/api/printed";
pub const ACCEPTED_HISTORY_PATH: &str = "/api/acchistoryids";
pub const ACCEPT_REQUEST_PATH: &str = "/api/accept-idcard";

/// Operations offered by the ID-card backend.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait IdCardApi: Send + Sync {
    /// Checks an admin identifier.
    ///
    /// A `success: false` outcome is not an error; only transport problems and
    /// unreadable bodies are.
    async fn login(&self, admin_id: &str) -> Result<LoginOutcome, RemoteApiError>;

    /// Fetches the requests waiting to be printed, normalized to `pending`.
    async fn list_pending(&self) -> Result<Vec<StudentIdRequest>, RemoteApiError>;

    /// Fetches the accepted history, normalized to `printed`.
    async fn list_accepted_history(&self) -> Result<Vec<StudentIdRequest>, RemoteApiError>;

    /// Asks the backend to copy a request into its accepted history.
    async fn accept(
        &self,
        payload: &PromotionPayload,
    ) -> Result<AcceptConfirmation, RemoteApiError>;
}
