//! Service errors. Their `Display` output is the text shown to the admin.

use idcard_providers::{common_models::id_card_request::RequestId, remote_api::error::RemoteApiError};
use thiserror::Error;

pub const ADMIN_ID_REQUIRED: &str = "Admin ID is required";
pub const LOGIN_FAILED: &str = "Login failed.";
pub const LOGIN_UNAVAILABLE: &str = "An error occurred. Please try again.";
pub const PROMOTION_FAILED: &str = "Error while moving request.";

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("{}", ADMIN_ID_REQUIRED)]
    MissingAdminId,
    #[error("A login is already in progress")]
    AlreadySubmitting,
    #[error("{0}")]
    Rejected(String),
    #[error("{}", LOGIN_UNAVAILABLE)]
    Network(#[source] RemoteApiError),
}

#[derive(Debug, Error)]
pub enum RequestServiceError {
    #[error("Request not found.")]
    NotFound(RequestId),
    #[error("{0}")]
    RemoteRejected(String),
    #[error("{}", PROMOTION_FAILED)]
    NetworkFailure(#[source] RemoteApiError),
}

impl From<RemoteApiError> for RequestServiceError {
    fn from(value: RemoteApiError) -> Self {
        match value {
            RemoteApiError::Rejected { message, .. } => {
                Self::RemoteRejected(message.unwrap_or_else(|| PROMOTION_FAILED.to_string()))
            }
            other => Self::NetworkFailure(other),
        }
    }
}
