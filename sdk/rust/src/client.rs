use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Please enter some text to summarize.")]
    EmptyInput,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer; `message` is the relay's `error` field when present.
    #[error("{message}")]
    Api { status: u16, message: String },
}

pub struct RelayClient {
    client: Client,
    relay_url: String,
}

impl RelayClient {
    pub fn new(relay_url: &str) -> Self {
        Self {
            client: Client::new(),
            relay_url: relay_url.trim_end_matches('/').to_string(),
        }
    }

    /// Summarize `text`. Input is trimmed and must not be empty.
    pub async fn summarize(&self, text: &str) -> Result<String, SdkError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SdkError::EmptyInput);
        }

        let resp = self
            .client
            .post(format!("{}/summarize", self.relay_url))
            .json(&SummarizeRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(SdkError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: SummarizeResponse =
            serde_json::from_str(&body).map_err(|_| SdkError::Api {
                status: status.as_u16(),
                message: "Something went wrong".to_string(),
            })?;
        Ok(parsed.summary)
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| "Failed to summarize".to_string())
}
