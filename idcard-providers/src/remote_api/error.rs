//! Enumerates errors related to the remote ID-card backend.

use thiserror::Error;

use crate::http_client::{self, StatusCode};

#[derive(Debug, Error)]
pub enum RemoteApiError {
    #[error("Transport error: `{0}`")]
    Transport(#[from] http_client::Error),
    #[error("Rejected with status {status}: `{}`", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Invalid response: `{0}`")]
    InvalidResponse(String),
}
