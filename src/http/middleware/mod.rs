//! Cross-cutting request/response layers.

pub mod access_log;
pub mod cors;

pub use access_log::{access_log, ResponseRecord};
pub use cors::CorsHeaders;
