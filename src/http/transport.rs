//! HTTP transport abstraction.
//!
//! # Responsibilities
//! - Send an intercepted request and hand back status and envelope
//! - Enforce the request timeout
//! - Report non-2xx answers as failures carrying the status
//!
//! # Design Decisions
//! - `Transport` is a trait so the client can be exercised without a network
//! - Bodies are decoded as JSON, falling back to the raw text
//! - Relative paths are appended to the base URL, absolute URLs used as-is
//! - Method names are uppercased on the wire; interceptors see them as given

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

use crate::config::HttpConfig;
use crate::http::error::{HttpError, HttpResult};
use crate::http::request::{OutgoingRequest, RequestBody};
use crate::http::response::TransportResponse;

/// Something that can carry a request to the server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request`.
    ///
    /// # Errors
    /// Returns [`HttpError::Status`] for non-2xx answers, [`HttpError::Timeout`]
    /// when no answer arrives in time and [`HttpError::Network`] for
    /// connection failures.
    async fn send(&self, request: OutgoingRequest) -> HttpResult<TransportResponse>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Build a transport from the HTTP settings.
    pub fn new(config: &HttpConfig) -> HttpResult<Self> {
        Url::parse(&config.base_url).map_err(|e| HttpError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| HttpError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    /// Resolve a request path against the base URL.
    pub fn url_for(&self, path: &str) -> HttpResult<Url> {
        let invalid = |e: url::ParseError, url: &str| HttpError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        };

        if let Ok(absolute) = Url::parse(path) {
            return Ok(absolute);
        }

        let joined = if path.is_empty() {
            self.base_url.clone()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };
        Url::parse(&joined).map_err(|e| invalid(e, &joined))
    }

    fn map_error(&self, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout(self.timeout_ms)
        } else {
            HttpError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: OutgoingRequest) -> HttpResult<TransportResponse> {
        let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| HttpError::InvalidMethod(request.method.clone()))?;
        let url = self.url_for(&request.path)?;

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            Some(RequestBody::Text(text)) => builder.body(text),
            Some(RequestBody::Structured(value)) => builder.json(&value),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_error(e))?;
        let body = decode_body(&text);

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Decode a response body: JSON when possible, otherwise the raw text.
pub fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
