//! HTTP transport for backend calls.
//!
//! Queries talk to the backend through the [`Transport`] trait so the network
//! can be replaced (tests use a scripted in-memory transport).

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::{Endpoint, Method};
use crate::error::Result;

/// Raw HTTP response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request to a backend route.
///
/// `body` is the JSON request body for `POST` routes and `None` for `GET`.
pub trait Transport: Send + Sync {
    fn send(&self, endpoint: Endpoint, body: Option<&Value>) -> Result<HttpResponse>;
}

/// Blocking `reqwest` transport bound to a base URL.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Transport for HttpTransport {
    fn send(&self, endpoint: Endpoint, body: Option<&Value>) -> Result<HttpResponse> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "sending request");

        let request = match endpoint.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url).json(body.unwrap_or(&Value::Null)),
        };

        let resp = request.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        tracing::debug!(%url, status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}
