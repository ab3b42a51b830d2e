//! Minimal HTTP transport used by the remote API implementations.
//!
//! Every backend call is a single request: no retries, caching or timeouts
//! are layered on top of the underlying client.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod imp;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> RequestBuilder;
    fn post(&self, url: &str) -> RequestBuilder;

    async fn send(
        &self,
        url: &str,
        body: Option<Vec<u8>>,
        headers: Option<Headers>,
        method: Method,
    ) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Other HTTP client error: {0}")]
    Other(String),
}

/// A fully read response. Response headers are not kept.
#[derive(Debug)]
pub struct Response {
    pub body: Vec<u8>,
    pub status: StatusCode,
}

impl Response {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    method: Method,
    url: String,
    headers: Headers,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: &str) -> Self {
        Self {
            client,
            method,
            url: url.to_owned(),
            headers: Headers::default(),
            body: None,
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `value` as the body and marks it as JSON.
    pub fn json<T: Serialize>(self, value: T) -> Result<Self, Error> {
        let body = serde_json::to_vec(&value)?;

        Ok(self.header("Content-Type", "application/json").body(body))
    }

    pub async fn send(self) -> Result<Response, Error> {
        let headers = (!self.headers.is_empty()).then_some(self.headers);

        self.client
            .send(&self.url, self.body, headers, self.method)
            .await
    }
}
