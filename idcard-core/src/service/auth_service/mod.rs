//! Gate in front of the dashboard: checks an admin identifier against the
//! backend and tracks where the admin is allowed to be.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use idcard_providers::{common_models::id_card_request::LoginOutcome, remote_api::IdCardApi};
use tokio::sync::Mutex;

use crate::{
    model::{AdminSession, Route},
    service::error::{AuthServiceError, LOGIN_FAILED},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub route: Route,
    pub session: Option<AdminSession>,
    pub error: Option<String>,
    pub submitting: bool,
}

pub struct AuthService {
    api: Arc<dyn IdCardApi>,
    submitting: AtomicBool,
    state: Mutex<AuthState>,
}

impl AuthService {
    pub fn new(api: Arc<dyn IdCardApi>) -> Self {
        Self {
            api,
            submitting: AtomicBool::new(false),
            state: Mutex::new(AuthState::default()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub async fn snapshot(&self) -> AuthState {
        let state = self.state.lock().await;

        AuthState {
            submitting: self.is_submitting(),
            ..state.clone()
        }
    }

    pub async fn login(&self, admin_id: &str) -> Result<Route, AuthServiceError> {
        if admin_id.trim().is_empty() {
            return Err(self.fail(AuthServiceError::MissingAdminId).await);
        }

        let _submitting =
            SubmittingGuard::acquire(&self.submitting).ok_or(AuthServiceError::AlreadySubmitting)?;

        match self.api.login(admin_id).await {
            Ok(LoginOutcome { success: true, .. }) => {
                tracing::info!(admin_id, "admin logged in");

                let mut state = self.state.lock().await;
                state.route = Route::Dashboard;
                state.session = Some(AdminSession {
                    admin_id: admin_id.to_owned(),
                });
                state.error = None;

                Ok(Route::Dashboard)
            }
            Ok(LoginOutcome { message, .. }) => {
                tracing::info!(admin_id, "login rejected");

                let message = message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED.to_string());
                Err(self.fail(AuthServiceError::Rejected(message)).await)
            }
            Err(err) => {
                tracing::warn!(error = %err, "login call failed");

                Err(self.fail(AuthServiceError::Network(err)).await)
            }
        }
    }

    /// Drops the current error, as when the admin edits the identifier.
    pub async fn clear_error(&self) {
        self.state.lock().await.error = None;
    }

    pub async fn logout(&self) {
        let mut state = self.state.lock().await;
        state.route = Route::Login;
        state.session = None;
        state.error = None;
    }

    async fn fail(&self, err: AuthServiceError) -> AuthServiceError {
        self.state.lock().await.error = Some(err.to_string());
        err
    }
}

/// Holds the `submitting` flag; releasing it on drop covers every way a
/// login call can end, including cancellation.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod test;
