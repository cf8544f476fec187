//! Wire types for `/summarize`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeRequest {
    /// Missing or `null` text is rejected as required, not as malformed.
    #[serde(default)]
    pub text: Option<String>,
}

impl SummarizeRequest {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: &'static str,
}
