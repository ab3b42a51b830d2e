//! Keeps the pending and printed request collections in step with the backend.
//!
//! Both collections are cached snapshots. They change only through an
//! explicit load, [`RequestService::refresh`] or a promotion; there is no push
//! from the backend.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use idcard_providers::{
    common_models::id_card_request::{
        AcceptConfirmation, PromotionPayload, RequestId, StudentIdRequest,
    },
    remote_api::{error::RemoteApiError, IdCardApi},
};
use tokio::sync::Mutex;

use crate::{
    model::{Notice, PromoteStrategy, RequestTab, TabCounts},
    service::error::RequestServiceError,
};

pub mod state;

use state::DashboardState;

pub const PROMOTION_SUCCEEDED: &str = "Student ID request has been accepted for printing.";

#[derive(Debug, Clone, PartialEq)]
pub struct PromoteOutcome {
    pub strategy: PromoteStrategy,
    pub confirmation: AcceptConfirmation,
    /// A follow-up fetch failed, so local state is only an approximation.
    pub degraded: bool,
}

pub struct RequestService {
    api: Arc<dyn IdCardApi>,
    state: Mutex<DashboardState>,
    closed: AtomicBool,
}

impl RequestService {
    pub fn new(api: Arc<dyn IdCardApi>) -> Self {
        Self {
            api,
            state: Mutex::new(DashboardState::default()),
            closed: AtomicBool::new(false),
        }
    }

    /// Fetches both collections concurrently. A failure only leaves its own
    /// collection untouched and is logged.
    pub async fn initial_load(&self) {
        if self.is_closed() {
            return;
        }

        // Failures are logged where they happen.
        let (_pending, _printed) = tokio::join!(self.load_pending(), self.load_printed());
    }

    /// Re-fetches both collections and replaces each one that loaded.
    pub async fn refresh(&self) -> Result<(), RequestServiceError> {
        let (pending, printed) = tokio::join!(self.load_pending(), self.load_printed());

        pending?;
        printed?;
        Ok(())
    }

    pub async fn promote(&self, id: &RequestId) -> Result<PromoteOutcome, RequestServiceError> {
        self.promote_with(id, PromoteStrategy::default()).await
    }

    /// Accepts a pending request for printing, then updates local state
    /// according to `strategy`. The result is also recorded as a notice.
    pub async fn promote_with(
        &self,
        id: &RequestId,
        strategy: PromoteStrategy,
    ) -> Result<PromoteOutcome, RequestServiceError> {
        let result = self.accept_and_sync(id, strategy).await;

        let notice = match &result {
            Ok(_) => Notice::success(PROMOTION_SUCCEEDED),
            Err(err) => Notice::error(err.to_string()),
        };
        self.update(|state| state.notice = Some(notice)).await;

        result
    }

    async fn accept_and_sync(
        &self,
        id: &RequestId,
        strategy: PromoteStrategy,
    ) -> Result<PromoteOutcome, RequestServiceError> {
        let request = self
            .state
            .lock()
            .await
            .find_pending(id)
            .cloned()
            .ok_or_else(|| RequestServiceError::NotFound(id.to_owned()))?;

        let confirmation = self
            .api
            .accept(&PromotionPayload::from(&request))
            .await
            .map_err(|err| {
                tracing::warn!(request_id = %id, error = %err, "accepting request failed");
                RequestServiceError::from(err)
            })?;

        tracing::info!(
            request_id = %id,
            register_number = %request.register_number,
            ?strategy,
            "request accepted for printing"
        );

        let degraded = match strategy {
            PromoteStrategy::OptimisticPatch => {
                self.update(|state| state.mark_printed(id)).await;
                false
            }
            PromoteStrategy::Resync => {
                let (pending, printed) = tokio::join!(self.load_pending(), self.load_printed());

                if pending.is_err() {
                    self.update(|state| state.remove_pending(id)).await;
                }

                pending.is_err() || printed.is_err()
            }
        };

        Ok(PromoteOutcome {
            strategy,
            confirmation,
            degraded,
        })
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    pub async fn visible_requests(&self) -> Vec<StudentIdRequest> {
        self.state.lock().await.visible_requests()
    }

    pub async fn counts(&self) -> TabCounts {
        self.state.lock().await.counts()
    }

    /// Switches the displayed collection. Never fetches.
    pub async fn set_tab(&self, tab: RequestTab) {
        self.state.lock().await.active_tab = tab;
    }

    pub async fn set_search_term(&self, search_term: &str) {
        self.state.lock().await.search_term = search_term.to_owned();
    }

    /// Selects a request of the active tab for the card preview.
    pub async fn select_for_preview(
        &self,
        id: &RequestId,
    ) -> Result<StudentIdRequest, RequestServiceError> {
        let mut state = self.state.lock().await;

        let request = state
            .collection(state.active_tab)
            .iter()
            .find(|request| &request.id == id)
            .cloned()
            .ok_or_else(|| RequestServiceError::NotFound(id.to_owned()))?;

        state.selected = Some(request.clone());
        Ok(request)
    }

    pub async fn close_preview(&self) {
        self.state.lock().await.selected = None;
    }

    pub async fn dismiss_notice(&self) {
        self.state.lock().await.notice = None;
    }

    /// Ends this view's lifetime. Fetches still in flight complete, but
    /// their results are dropped.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    async fn load_pending(&self) -> Result<(), RemoteApiError> {
        match self.api.list_pending().await {
            Ok(requests) => {
                self.update(|state| state.pending = requests).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "loading pending requests failed");
                Err(err)
            }
        }
    }

    async fn load_printed(&self) -> Result<(), RemoteApiError> {
        match self.api.list_accepted_history().await {
            Ok(requests) => {
                self.update(|state| state.printed = requests).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "loading accepted history failed");
                Err(err)
            }
        }
    }

    async fn update(&self, apply: impl FnOnce(&mut DashboardState)) {
        let mut state = self.state.lock().await;

        if self.is_closed() {
            tracing::debug!("view closed, discarding update");
            return;
        }

        apply(&mut state);
    }
}
