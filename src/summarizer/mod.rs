//! Summarization gateway.
//!
//! # Responsibilities
//! - Check the API key before any provider call
//! - Build the fixed prompt around the caller's text
//! - Join, trim and truncate the provider output to three lines
//!
//! # Design Decisions
//! - The API key is a constructor argument, never read from global state
//! - Every failure is terminal; callers retry with a new request
//! - The provider is a trait object so tests can substitute it

pub mod prompt;

use std::sync::Arc;

use thiserror::Error;

use crate::provider::{ContentGenerator, ProviderError};

pub use prompt::{build_prompt, truncate_lines, SUMMARY_LINES};

/// Gateway failures. None of these are shown to HTTP clients.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// No usable API key was configured.
    #[error("missing API key")]
    MissingApiKey,

    /// The provider call failed.
    #[error("upstream: {0}")]
    Upstream(#[from] ProviderError),

    /// The provider answered with nothing but whitespace.
    #[error("empty response from model")]
    EmptyResponse,
}

impl SummarizeError {
    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SummarizeError::MissingApiKey => "configuration",
            SummarizeError::Upstream(_) => "upstream",
            SummarizeError::EmptyResponse => "empty_output",
        }
    }
}

/// Produces ≤3-line summaries through a [`ContentGenerator`].
#[derive(Clone)]
pub struct Summarizer {
    api_key: Option<String>,
    generator: Arc<dyn ContentGenerator>,
}

impl Summarizer {
    pub fn new(api_key: Option<String>, generator: Arc<dyn ContentGenerator>) -> Self {
        Self { api_key, generator }
    }

    /// Summarize `text` into at most [`SUMMARY_LINES`] lines.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(SummarizeError::MissingApiKey)?;

        let prompt = build_prompt(text);
        let fragments = self.generator.generate(api_key, &prompt).await?;

        let output = fragments.concat();
        let output = output.trim();
        if output.is_empty() {
            return Err(SummarizeError::EmptyResponse);
        }

        Ok(truncate_lines(output, SUMMARY_LINES))
    }
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}
