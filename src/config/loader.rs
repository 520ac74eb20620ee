//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::i18n::{Lang, LANG_ENV};

/// Environment variable holding the API base URL.
pub const APP_URL_ENV: &str = "PMAIL_APP_URL";

/// Environment variable overriding the transport timeout.
pub const TIMEOUT_ENV: &str = "PMAIL_TIMEOUT_MS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    Env { key: &'static str, value: String },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: optional TOML file, then environment overrides, then validation.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ClientConfig::default(),
    };

    apply_env(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment variables onto `config`.
///
/// `lookup` abstracts `std::env::var` so the overlay can be exercised without
/// touching the process environment.
pub fn apply_env<F>(config: &mut ClientConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(APP_URL_ENV) {
        config.http.base_url = url;
    }

    if let Some(lang) = lookup(LANG_ENV) {
        config.lang = Lang::from(lang.as_str());
    }

    if let Some(raw) = lookup(TIMEOUT_ENV) {
        config.http.timeout_ms = raw.trim().parse().map_err(|_| ConfigError::Env {
            key: TIMEOUT_ENV,
            value: raw.clone(),
        })?;
    }

    Ok(())
}
