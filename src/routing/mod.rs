//! Client-side routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target ("/detail/42?tab=raw")
//!     → router.rs (split path / query / hash, scan entries)
//!     → pattern.rs (segment match, capture `:id`)
//!     → Return: RouteMatch { name, view, params, query } or None
//!
//! Table Compilation (at startup):
//!     (pattern, name, view)[]
//!     → Parse patterns
//!     → Reject duplicate names / overlapping patterns
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (segment matching only)
//! - First match wins (declaration order)
//! - Navigation sits behind the `Navigator` trait so the HTTP client never
//!   depends on a concrete history implementation

pub mod navigation;
pub mod pattern;
pub mod router;

pub use navigation::{redirect_to_login, HistoryNavigator, Navigator, LOGIN_PATH, REDIRECT_PARAM};
pub use pattern::{Params, RoutePattern};
pub use router::{Query, RouteEntry, RouteMatch, RouteTable, RouteTableError, View};
