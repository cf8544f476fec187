//! Generative-language providers.
//!
//! # Data Flow
//! ```text
//! Summarizer (prompt)
//!     → ContentGenerator::generate (one provider call per request)
//!     → Vec<String> text fragments
//!     → Summarizer (join, trim, truncate)
//! ```
//!
//! # Design Decisions
//! - The provider only returns raw fragments; all post-processing lives in
//!   the summarizer so any provider gets identical output handling
//! - Each call owns its HTTP client; nothing is pooled across requests

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiGenerator;

/// Errors returned by a provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP client could not be constructed.
    #[error("client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, send or decode failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Prompt was rejected by the provider's safety filters.
    #[error("prompt blocked: {0}")]
    Blocked(String),
}

/// A text-generation backend.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate content for `prompt`, returning every text fragment in order.
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<Vec<String>, ProviderError>;
}
