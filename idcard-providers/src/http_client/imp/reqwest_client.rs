use std::str::FromStr;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::http_client::{
    Error, Headers, HttpClient, Method, RequestBuilder, Response, StatusCode,
};

/// [`HttpClient`] backed by a shared [`reqwest::Client`].
#[derive(Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<reqwest::Client> for ReqwestClient {
    fn from(client: reqwest::Client) -> Self {
        Self::new(client)
    }
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), Method::Get, url)
    }

    fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), Method::Post, url)
    }

    async fn send(
        &self,
        url: &str,
        body: Option<Vec<u8>>,
        headers: Option<Headers>,
        method: Method,
    ) -> Result<Response, Error> {
        tracing::debug!(url, ?method, "sending request");

        let mut request = self.client.request(method.into(), url);
        if let Some(headers) = headers {
            request = request.headers(header_map(&headers)?);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        read_response(response).await
    }
}

fn header_map(headers: &Headers) -> Result<HeaderMap, Error> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (key, value) in headers {
        let name = HeaderName::from_str(key).map_err(|e| Error::Other(e.to_string()))?;
        let value = HeaderValue::from_str(value).map_err(|e| Error::Other(e.to_string()))?;
        map.insert(name, value);
    }

    Ok(map)
}

async fn read_response(response: reqwest::Response) -> Result<Response, Error> {
    let status = StatusCode(response.status().as_u16());

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::HttpError(e.to_string()))?
        .to_vec();

    tracing::debug!(%status, bytes = body.len(), "received response");

    Ok(Response { body, status })
}
