//! Values derived for display next to a request.

use idcard_providers::{
    common_models::id_card_request::RequestStatus, remote_api::mapper::MISSING_DATE,
};
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

use crate::model::RequestTab;

/// Renders a creation timestamp as `YYYY-MM-DD | hh:mm AM`.
///
/// The timestamp keeps its own offset. Missing or unparseable input gives `N/A`.
pub fn format_created_at(created_at: Option<&str>) -> String {
    let format = format_description!("[year]-[month]-[day] | [hour repr:12]:[minute] [period]");

    created_at
        .and_then(parse_timestamp)
        .and_then(|timestamp| timestamp.format(&format).ok())
        .unwrap_or_else(|| MISSING_DATE.to_string())
}

fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    if let Ok(timestamp) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(timestamp);
    }

    let date_only = format_description!("[year]-[month]-[day]");
    Date::parse(value, &date_only)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

pub fn status_label(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "Pending",
        RequestStatus::Printed => "Printed",
    }
}

pub fn empty_list_message(tab: RequestTab) -> String {
    format!("No {tab} requests found.")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_created_at() {
        assert_eq!(
            format_created_at(Some("2024-03-05T14:07:00Z")),
            "2024-03-05 | 02:07 PM"
        );
        assert_eq!(
            format_created_at(Some("2024-03-05T00:30:15.250Z")),
            "2024-03-05 | 12:30 AM"
        );
        assert_eq!(
            format_created_at(Some("2024-03-05T12:00:00+05:30")),
            "2024-03-05 | 12:00 PM"
        );
        assert_eq!(format_created_at(Some("2024-03-05")), "2024-03-05 | 12:00 AM");
    }

    #[test]
    fn test_format_created_at_missing_or_invalid() {
        assert_eq!(format_created_at(None), "N/A");
        assert_eq!(format_created_at(Some("")), "N/A");
        assert_eq!(format_created_at(Some("yesterday")), "N/A");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("asha raman"), "AR");
        assert_eq!(initials("Vikram  S"), "VS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_labels() {
        assert_eq!(status_label(RequestStatus::Pending), "Pending");
        assert_eq!(status_label(RequestStatus::Printed), "Printed");
        assert_eq!(empty_list_message(RequestTab::Printed), "No printed requests found.");
    }
}
