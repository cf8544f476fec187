//! Text summarization relay library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod provider;
pub mod summarizer;

pub use config::schema::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
