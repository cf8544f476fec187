//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional relay.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → .env / process environment (API key)
//!     → RelayConfig (validated, immutable)
//!     → passed by value into HttpServer::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the API key is injected, never global
//! - All fields have defaults so the relay runs with no config file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_dotenv, resolve_api_key, ConfigError};
pub use schema::{
    CorsConfig, LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, ProviderConfig,
    RelayConfig,
};
