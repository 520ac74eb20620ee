//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overlay (PMAIL_APP_URL, PMAIL_LANG, PMAIL_TIMEOUT_MS)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → handed to the HTTP client once at construction
//! ```
//!
//! # Design Decisions
//! - Config is read once at start-up and never re-read at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ClientConfig, HttpConfig, ObservabilityConfig};
