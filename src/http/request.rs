//! Outgoing request model and the request interceptor.
//!
//! # Responsibilities
//! - Describe a request before it reaches the transport
//! - Merge the default headers captured at construction
//! - Serialize `"POST"` bodies to JSON text
//!
//! # Design Decisions
//! - The method stays a string so the `"POST"` comparison is exact and
//!   case-sensitive; `"post"` is passed through untouched
//! - Request-level headers win over defaults (case-insensitive names)

use std::collections::BTreeMap;

use serde_json::Value;

use crate::http::error::HttpResult;

/// Request header names and values.
pub type Headers = BTreeMap<String, String>;

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Structured value, sent in the transport's native JSON form.
    Structured(Value),
    /// Pre-serialized text, sent as-is.
    Text(String),
}

/// A request as seen by the interceptors.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub method: String,
    pub path: String,
    pub headers: Headers,
    pub body: Option<RequestBody>,
}

impl OutgoingRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Attach a structured body.
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Structured(body));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Apply `defaults` beneath the request's own headers.
pub fn merge_default_headers(request: &mut OutgoingRequest, defaults: &Headers) {
    for (name, value) in defaults {
        let overridden = request
            .headers
            .keys()
            .any(|existing| existing.eq_ignore_ascii_case(name));
        if !overridden {
            request.headers.insert(name.clone(), value.clone());
        }
    }
}

/// Turn a structured `"POST"` body into JSON text. Other methods are untouched.
pub fn serialize_post_body(mut request: OutgoingRequest) -> HttpResult<OutgoingRequest> {
    if request.method == "POST" {
        if let Some(RequestBody::Structured(value)) = &request.body {
            let text = serde_json::to_string(value)?;
            request.body = Some(RequestBody::Text(text));
        }
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_body_becomes_text() {
        let req = OutgoingRequest::new("POST", "/api/email/detail").with_json(json!({"id": 3}));
        let req = serialize_post_body(req).unwrap();
        assert_eq!(req.body, Some(RequestBody::Text("{\"id\":3}".into())));
    }

    #[test]
    fn test_lowercase_post_is_not_serialized() {
        let req = OutgoingRequest::new("post", "/api/email/detail").with_json(json!({"id": 3}));
        let req = serialize_post_body(req).unwrap();
        assert_eq!(req.body, Some(RequestBody::Structured(json!({"id": 3}))));
    }

    #[test]
    fn test_other_methods_untouched() {
        for method in ["GET", "PUT", "DELETE", "PATCH"] {
            let req = OutgoingRequest::new(method, "/x").with_json(json!([1, 2]));
            let out = serialize_post_body(req.clone()).unwrap();
            assert_eq!(out, req);
        }
    }

    #[test]
    fn test_post_without_body() {
        let req = OutgoingRequest::new("POST", "/api/logout");
        assert_eq!(serialize_post_body(req.clone()).unwrap(), req);
    }

    #[test]
    fn test_merge_default_headers() {
        let mut defaults = Headers::new();
        defaults.insert("Content-Type".into(), "application/json;charset=UTF-8;".into());
        defaults.insert("Lang".into(), "en".into());

        let mut req = OutgoingRequest::new("GET", "/").with_header("lang", "zhCn");
        merge_default_headers(&mut req, &defaults);

        assert_eq!(req.headers.get("lang").map(String::as_str), Some("zhCn"));
        assert!(!req.headers.contains_key("Lang"));
        assert_eq!(
            req.headers.get("Content-Type").map(String::as_str),
            Some("application/json;charset=UTF-8;")
        );
    }
}
