//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Base URL must be an absolute http(s) URL
//! - Timeout must be non-zero
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("http.base_url '{0}' is not a valid URL: {1}")]
    InvalidBaseUrl(String, String),

    #[error("http.base_url '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("http.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("http.content_type must not be empty")]
    EmptyContentType,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.http.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(ValidationError::UnsupportedScheme(config.http.base_url.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl(
            config.http.base_url.clone(),
            e.to_string(),
        )),
    }

    if config.http.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.http.content_type.trim().is_empty() {
        errors.push(ValidationError::EmptyContentType);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ClientConfig::default();
        config.http.base_url = "not a url".into();
        config.http.timeout_ms = 0;
        config.http.content_type = " ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::InvalidBaseUrl(..)));
        assert_eq!(errors[1], ValidationError::ZeroTimeout);
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = ClientConfig::default();
        config.http.base_url = "ftp://mail.example.com/".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::UnsupportedScheme(_)));
    }
}
