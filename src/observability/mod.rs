//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http / routing / config produce:
//!     → tracing events (request sent, response status, login redirect,
//!       localized failure message)
//!     → logging.rs subscriber → stderr
//! ```
//!
//! # Design Decisions
//! - Structured fields (status, message, redirect) rather than formatted text
//! - Failure messages reach the log only; callers get the error itself

pub mod logging;

pub use logging::init_logging;
