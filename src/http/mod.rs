//! HTTP client facade subsystem.
//!
//! # Data Flow
//! ```text
//! Call site (get/post/put/delete)
//!     → request.rs (merge default headers, serialize "POST" body)
//!     → transport.rs (reqwest, base URL, 6000 ms timeout)
//!     → 2xx:  response.rs (errorNo == 403 → login redirect) → envelope
//!     → else: status.rs (status → message key / redirect)
//!             → error returned unchanged
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod status;
pub mod transport;

pub use client::HttpClient;
pub use error::{HttpError, HttpResult};
pub use request::{OutgoingRequest, RequestBody};
pub use response::TransportResponse;
pub use transport::{ReqwestTransport, Transport};
