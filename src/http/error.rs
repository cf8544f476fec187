//! Mapping of request failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::dto::ErrorResponse;
use crate::summarizer::SummarizeError;

/// Every way a `/summarize` request can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid JSON body")]
    InvalidJson(#[source] serde_json::Error),

    #[error("text is required")]
    TextRequired,

    /// Cause is logged, never returned to the client.
    #[error("failed to summarize")]
    Summarize(#[from] SummarizeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::TextRequired => StatusCode::BAD_REQUEST,
            ApiError::Summarize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid JSON body",
            ApiError::TextRequired => "text is required",
            ApiError::Summarize(_) => "failed to summarize",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.message(),
            }),
        )
            .into_response()
    }
}
