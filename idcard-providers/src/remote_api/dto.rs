use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDTO<'a> {
    pub admin_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponseDTO {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A request record as stored by the backend.
///
/// Every field is optional on the wire; numbers are accepted where strings
/// are expected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCardRequestDTO {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub register_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub library_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: Option<String>,
    /// Ignored: status is decided by the endpoint the record came from.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptIdCardRequestDTO {
    pub register_number: String,
    pub name: String,
    pub dob: String,
    pub department: String,
    pub year: String,
    pub section: String,
    pub library_code: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponseDTO {
    #[serde(default)]
    pub error: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(serde_json::Value::String(value)) => Some(value),
        Some(serde_json::Value::Number(value)) => Some(value.to_string()),
        Some(serde_json::Value::Bool(value)) => Some(value.to_string()),
        _ => None,
    })
}
