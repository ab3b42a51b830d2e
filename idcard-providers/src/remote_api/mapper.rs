use crate::{
    common_models::id_card_request::{
        AcceptConfirmation, LoginOutcome, PromotionPayload, RequestId, RequestStatus,
        StudentIdRequest,
    },
    remote_api::dto::{AcceptIdCardRequestDTO, IdCardRequestDTO, LoginResponseDTO},
};

pub const MISSING_DATE: &str = "N/A";

/// Maps raw backend records onto the domain model.
///
/// `status` is forced for every record; records without an identifier get
/// their position in `records` instead.
pub fn normalize_records(
    records: Vec<IdCardRequestDTO>,
    status: RequestStatus,
) -> Vec<StudentIdRequest> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| normalize_record(index, record, status))
        .collect()
}

fn normalize_record(index: usize, record: IdCardRequestDTO, status: RequestStatus) -> StudentIdRequest {
    let id = record
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| index.to_string());

    StudentIdRequest {
        id: RequestId::from(id),
        register_number: record.register_number.unwrap_or_default(),
        name: record.name.unwrap_or_default(),
        dob: record.dob.unwrap_or_default(),
        department: record.department.unwrap_or_default(),
        year: record.year.unwrap_or_default(),
        section: record.section.unwrap_or_default(),
        library_code: record.library_code.unwrap_or_default(),
        reason: record.reason.unwrap_or_default(),
        status,
        submitted_date: submitted_date(record.created_at.as_deref()),
        created_at: record.created_at,
        extra: record.rest,
    }
}

/// Date part of an ISO timestamp, i.e. everything before the `T`.
pub fn submitted_date(created_at: Option<&str>) -> String {
    match created_at.and_then(|value| value.split('T').next()) {
        Some(date) if !date.is_empty() => date.to_owned(),
        _ => MISSING_DATE.to_owned(),
    }
}

impl From<&PromotionPayload> for AcceptIdCardRequestDTO {
    fn from(value: &PromotionPayload) -> Self {
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

impl From<LoginResponseDTO> for LoginOutcome {
    fn from(value: LoginResponseDTO) -> Self {
        Self {
            success: value.success,
            message: value.message,
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for AcceptConfirmation {
    fn from(mut value: serde_json::Map<String, serde_json::Value>) -> Self {
        let message = match value.remove("message") {
            Some(serde_json::Value::String(message)) => Some(message),
            Some(other) => {
                value.insert("message".to_owned(), other);
                None
            }
            None => None,
        };

        Self {
            message,
            details: value,
        }
    }
}
