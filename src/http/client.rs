//! HTTP client facade.
//!
//! # Responsibilities
//! - Hold the configuration snapshot taken at construction
//! - Run the request interceptor (default headers, POST serialization)
//! - Run the response interceptor (login redirect, failure message)
//! - Hand callers the envelope only, never transport metadata
//!
//! # Design Decisions
//! - The language is read once, at construction
//! - Failures are always returned unchanged; the redirect is a side effect
//! - The failure message is only logged (`key` and `localized` fields of a
//!   WARN event), not returned

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::http::error::{HttpError, HttpResult};
use crate::http::request::{merge_default_headers, serialize_post_body, Headers, OutgoingRequest};
use crate::http::response::{envelope_requires_login, failure_message, TransportResponse};
use crate::http::status::REAUTH_STATUS;
use crate::http::transport::{ReqwestTransport, Transport};
use crate::i18n::Lang;
use crate::routing::navigation::{redirect_to_login, Navigator};

/// Name of the header carrying the client language.
pub const LANG_HEADER: &str = "Lang";

/// Request/response facade shared by every API call site.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
    default_headers: Headers,
    lang: Lang,
}

impl HttpClient {
    /// Create a client that talks to `config.http.base_url` over reqwest.
    pub fn new(config: &ClientConfig, navigator: Arc<dyn Navigator>) -> HttpResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config.http)?);
        Ok(Self::with_transport(config, transport, navigator))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut default_headers = Headers::new();
        default_headers.insert("Content-Type".to_string(), config.http.content_type.clone());
        default_headers.insert(LANG_HEADER.to_string(), config.lang.code().to_string());

        tracing::debug!(
            base_url = %config.http.base_url,
            timeout_ms = config.http.timeout_ms,
            lang = %config.lang,
            "HTTP client initialized"
        );

        Self {
            transport,
            navigator,
            default_headers,
            lang: config.lang,
        }
    }

    /// Send a request through both interceptors and return the envelope.
    pub async fn request(&self, request: OutgoingRequest) -> HttpResult<Value> {
        let request = self.intercept_request(request)?;
        tracing::debug!(method = %request.method, path = %request.path, "Sending request");

        match self.transport.send(request).await {
            Ok(response) => Ok(self.intercept_response(response)),
            Err(error) => Err(self.intercept_error(error)),
        }
    }

    pub async fn get(&self, path: &str) -> HttpResult<Value> {
        self.request(OutgoingRequest::new("GET", path)).await
    }

    pub async fn delete(&self, path: &str) -> HttpResult<Value> {
        self.request(OutgoingRequest::new("DELETE", path)).await
    }

    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> HttpResult<Value> {
        let body = serde_json::to_value(body)?;
        self.request(OutgoingRequest::new("POST", path).with_json(body))
            .await
    }

    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> HttpResult<Value> {
        let body = serde_json::to_value(body)?;
        self.request(OutgoingRequest::new("PUT", path).with_json(body))
            .await
    }

    fn intercept_request(&self, mut request: OutgoingRequest) -> HttpResult<OutgoingRequest> {
        merge_default_headers(&mut request, &self.default_headers);
        serialize_post_body(request)
    }

    fn intercept_response(&self, response: TransportResponse) -> Value {
        tracing::debug!(status = response.status, "Response received");
        if envelope_requires_login(&response.body) {
            redirect_to_login(self.navigator.as_ref());
        }
        response.body
    }

    fn intercept_error(&self, error: HttpError) -> HttpError {
        let Some(status) = error.status() else {
            tracing::debug!(error = %error, "Request failed without a response");
            return error;
        };

        if status == REAUTH_STATUS {
            redirect_to_login(self.navigator.as_ref());
        }
        // TODO: surface the message to the UI once a notification component exists.
        if let Some((key, localized)) = failure_message(self.lang, &error) {
            tracing::warn!(status, key = key.id(), localized, "Response rejected");
        }
        error
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("default_headers", &self.default_headers)
            .field("lang", &self.lang)
            .finish()
    }
}
