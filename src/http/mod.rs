//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → middleware/access_log.rs (timing, status, bytes)
//!     → middleware/cors.rs (fixed CORS headers)
//!     → handlers.rs (validate, call summarizer)
//!     → error.rs (status + {"error"} body on failure)
//!     → Send to client
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use dto::{ErrorResponse, SummarizeRequest, SummarizeResponse};
pub use error::ApiError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};
