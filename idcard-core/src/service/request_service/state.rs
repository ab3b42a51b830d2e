use idcard_providers::common_models::id_card_request::{
    RequestId, RequestStatus, StudentIdRequest,
};

use crate::model::{Notice, RequestTab, TabCounts};

/// Client-side view of the two server-owned collections.
///
/// Each collection is a snapshot of its last successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub pending: Vec<StudentIdRequest>,
    pub printed: Vec<StudentIdRequest>,
    pub active_tab: RequestTab,
    pub search_term: String,
    pub selected: Option<StudentIdRequest>,
    pub notice: Option<Notice>,
}

impl DashboardState {
    pub fn collection(&self, tab: RequestTab) -> &[StudentIdRequest] {
        match tab {
            RequestTab::Pending => &self.pending,
            RequestTab::Printed => &self.printed,
        }
    }

    /// The active tab's collection narrowed by the search term.
    pub fn visible_requests(&self) -> Vec<StudentIdRequest> {
        filter_by_register_number(self.collection(self.active_tab), &self.search_term)
    }

    pub fn counts(&self) -> TabCounts {
        TabCounts {
            pending: self.pending.len(),
            printed: self.printed.len(),
        }
    }

    pub(super) fn find_pending(&self, id: &RequestId) -> Option<&StudentIdRequest> {
        self.pending.iter().find(|request| &request.id == id)
    }

    pub(super) fn mark_printed(&mut self, id: &RequestId) {
        self.pending
            .iter_mut()
            .filter(|request| &request.id == id)
            .for_each(|request| request.status = RequestStatus::Printed);
    }

    pub(super) fn remove_pending(&mut self, id: &RequestId) {
        self.pending.retain(|request| &request.id != id);
    }
}

/// Case-insensitive substring match on the register number; an empty term keeps everything.
pub fn filter_by_register_number(
    requests: &[StudentIdRequest],
    search_term: &str,
) -> Vec<StudentIdRequest> {
    let needle = search_term.to_lowercase();

    requests
        .iter()
        .filter(|request| request.register_number.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
