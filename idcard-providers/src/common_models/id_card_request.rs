use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifier of a request within the collection currently holding it.
///
/// Identifiers are not stable across the pending to printed transition: the
/// backend assigns a fresh one when it copies a request into its history.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct RequestId(String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<RequestId> for String {
    fn from(value: RequestId) -> Self {
        value.0
    }
}

impl RequestId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Printed,
}

/// A student's request for a new or replacement ID card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdRequest {
    pub id: RequestId,
    pub register_number: String,
    pub name: String,
    pub dob: String,
    pub department: String,
    pub year: String,
    pub section: String,
    pub library_code: String,
    pub reason: String,
    pub status: RequestStatus,
    /// Date portion of `created_at`, or `N/A`.
    pub submitted_date: String,
    pub created_at: Option<String>,
    /// Backend fields with no dedicated attribute, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Fields sent to the backend when a request is accepted for printing.
///
/// Identifier and status are deliberately absent: the backend stores the
/// request under a new identity in its history collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionPayload {
    pub register_number: String,
    pub name: String,
    pub dob: String,
    pub department: String,
    pub year: String,
    pub section: String,
    pub library_code: String,
    pub reason: String,
}

impl From<&StudentIdRequest> for PromotionPayload {
    fn from(value: &StudentIdRequest) -> Self {
        Self {
            register_number: value.register_number.to_owned(),
            name: value.name.to_owned(),
            dob: value.dob.to_owned(),
            department: value.department.to_owned(),
            year: value.year.to_owned(),
            section: value.section.to_owned(),
            library_code: value.library_code.to_owned(),
            reason: value.reason.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcceptConfirmation {
    pub message: Option<String>,
    pub details: serde_json::Map<String, serde_json::Value>,
}
