//! Google Gemini `generateContent` REST client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::provider::{ContentGenerator, ProviderError};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini-backed [`ContentGenerator`].
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    base_url: String,
    model: String,
    no_proxy: bool,
}

impl GeminiGenerator {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            no_proxy: false,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.base_url.clone(), config.model.clone()).with_no_proxy(config.no_proxy)
    }

    /// Bypass `HTTP_PROXY`/`HTTPS_PROXY` for provider calls.
    pub fn with_no_proxy(mut self, no_proxy: bool) -> Self {
        self.no_proxy = no_proxy;
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl ContentGenerator for GeminiGenerator {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<Vec<String>, ProviderError> {
        // Scoped to this call; dropped on return or when the request is cancelled.
        let mut builder = Client::builder();
        if self.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(ProviderError::Client)?;

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini");

        let response = http
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::user_text(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.into_fragments()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn user_text(text: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of every candidate, in order. Candidates without content
    /// and non-text parts are skipped.
    fn into_fragments(self) -> Result<Vec<String>, ProviderError> {
        if self.candidates.is_empty() {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(ProviderError::Blocked(reason));
            }
        }

        Ok(self
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let generator = GeminiGenerator::new("http://127.0.0.1:9000/", "gemini-2.5-flash");
        assert_eq!(
            generator.endpoint(),
            "http://127.0.0.1:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::user_text("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }]
            })
        );
    }

    #[test]
    fn fragments_from_all_candidates() {
        let response = parse(
            r#"{
                "candidates": [
                    { "content": { "parts": [{ "text": "one" }, { "text": " two" }] } },
                    { "finishReason": "SAFETY" },
                    { "content": { "parts": [{ "inlineData": {} }, { "text": "three" }] } }
                ]
            }"#,
        );
        assert_eq!(response.into_fragments().unwrap(), vec!["one", " two", "three"]);
    }

    #[test]
    fn no_candidates_is_empty_not_error() {
        let response = parse(r#"{ "candidates": [] }"#);
        assert!(response.into_fragments().unwrap().is_empty());
        assert!(parse("{}").into_fragments().unwrap().is_empty());
    }

    #[test]
    fn blocked_prompt_is_error() {
        let response = parse(r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#);
        let err = response.into_fragments().unwrap_err();
        assert!(matches!(err, ProviderError::Blocked(ref r) if r == "SAFETY"));
    }

    #[tokio::test]
    async fn unreachable_provider_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let generator = GeminiGenerator::new(format!("http://{}", addr), "m").with_no_proxy(true);
        let err = generator.generate("key", "prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }
}
