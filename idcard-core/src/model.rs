use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Default, Display, EnumString, PartialEq, Eq)]
pub enum RequestTab {
    #[default]
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "printed")]
    Printed,
}

#[derive(Debug, Copy, Clone, Default, Display, EnumString, PartialEq, Eq)]
pub enum Route {
    #[default]
    #[strum(serialize = "/")]
    Login,
    #[strum(serialize = "/dashboard")]
    Dashboard,
}

/// How local state follows a successful promotion.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PromoteStrategy {
    /// Mark the request `printed` inside the pending collection.
    OptimisticPatch,
    /// Re-fetch both collections from the backend.
    #[default]
    Resync,
}

/// Badge counts, always taken from the unfiltered collections.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TabCounts {
    pub pending: usize,
    pub printed: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the admin (toast or alert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub admin_id: String,
}
