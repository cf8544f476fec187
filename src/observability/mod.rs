//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! access log middleware, handlers, gateway
//!     → logging.rs (tracing events to stdout)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
