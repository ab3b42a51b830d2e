//! [`IdCardApi`] over HTTP.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    common_models::id_card_request::{
        AcceptConfirmation, LoginOutcome, PromotionPayload, RequestStatus, StudentIdRequest,
    },
    http_client::{HttpClient, Response},
    remote_api::{
        dto::{
            AcceptIdCardRequestDTO, ErrorResponseDTO, IdCardRequestDTO, LoginRequestDTO,
            LoginResponseDTO,
        },
        error::RemoteApiError,
        mapper::normalize_records,
        IdCardApi, ACCEPTED_HISTORY_PATH, ACCEPT_REQUEST_PATH, LOGIN_PATH,
        PENDING_REQUESTS_PATH,
    },
};

pub struct HttpIdCardApi {
    base_url: String,
    client: Arc<dyn HttpClient>,
}

impl HttpIdCardApi {
    pub fn new(base_url: &str, client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch_requests(
        &self,
        path: &str,
        status: RequestStatus,
    ) -> Result<Vec<StudentIdRequest>, RemoteApiError> {
        let response = self.client.get(&self.url(path)).send().await?;

        if !response.status.is_success() {
            return Err(rejection(&response));
        }

        let records: Vec<IdCardRequestDTO> = response
            .json()
            .map_err(|e| RemoteApiError::InvalidResponse(e.to_string()))?;

        tracing::debug!(path, count = records.len(), "fetched id card requests");

        Ok(normalize_records(records, status))
    }
}

#[async_trait]
impl IdCardApi for HttpIdCardApi {
    async fn login(&self, admin_id: &str) -> Result<LoginOutcome, RemoteApiError> {
        let response = self
            .client
            .post(&self.url(LOGIN_PATH))
            .json(LoginRequestDTO { admin_id })?
            .send()
            .await?;

        // The body decides the outcome, whatever the status code says.
        let body: LoginResponseDTO = response
            .json()
            .map_err(|e| RemoteApiError::InvalidResponse(e.to_string()))?;

        Ok(body.into())
    }

    async fn list_pending(&self) -> Result<Vec<StudentIdRequest>, RemoteApiError> {
        self.fetch_requests(PENDING_REQUESTS_PATH, RequestStatus::Pending)
            .await
    }

    async fn list_accepted_history(&self) -> Result<Vec<StudentIdRequest>, RemoteApiError> {
        self.fetch_requests(ACCEPTED_HISTORY_PATH, RequestStatus::Printed)
            .await
    }

    async fn accept(
        &self,
        payload: &PromotionPayload,
    ) -> Result<AcceptConfirmation, RemoteApiError> {
        let response = self
            .client
            .post(&self.url(ACCEPT_REQUEST_PATH))
            .json(AcceptIdCardRequestDTO::from(payload))?
            .send()
            .await?;

        if !response.status.is_success() {
            return Err(rejection(&response));
        }

        if response.body.is_empty() {
            return Ok(AcceptConfirmation::default());
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| RemoteApiError::InvalidResponse(e.to_string()))?;

        // Any JSON on a 2xx means the record has moved; only objects carry details.
        Ok(match body {
            serde_json::Value::Object(body) => body.into(),
            _ => AcceptConfirmation::default(),
        })
    }
}

fn rejection(response: &Response) -> RemoteApiError {
    let message = response
        .json::<ErrorResponseDTO>()
        .ok()
        .and_then(|body| body.error);

    RemoteApiError::Rejected {
        status: response.status,
        message,
    }
}
