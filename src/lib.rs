//! PMail web client glue: HTTP facade and client-side route table.

pub mod config;
pub mod http;
pub mod i18n;
pub mod observability;
pub mod routing;

pub use config::schema::ClientConfig;
pub use http::HttpClient;
pub use routing::{HistoryNavigator, RouteTable};
