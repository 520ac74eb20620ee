//! Configuration schema definitions.
//!
//! This module defines the configuration snapshot taken by the web client at
//! start-up. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// Default `Content-Type` header sent with every request.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json;charset=UTF-8;";

/// Root configuration for the web client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// HTTP facade settings.
    pub http: HttpConfig,

    /// Active language, captured once at construction.
    pub lang: Lang,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// HTTP facade configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL every request path is joined onto.
    pub base_url: String,

    /// Transport timeout in milliseconds.
    pub timeout_ms: u64,

    /// Value of the `Content-Type` default header.
    pub content_type: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:80/".to_string(),
            timeout_ms: 6000,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (e.g. "info", "pmail_web=debug").
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "pmail_web=info".to_string(),
        }
    }
}
