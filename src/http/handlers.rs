//! `/summarize` handlers.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::http::dto::{SummarizeRequest, SummarizeResponse};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// CORS preflight. Answered before any body is read.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Validate the body, call the gateway, return at most three lines.
///
/// The body is decoded as JSON whatever its `Content-Type`.
pub async fn summarize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, ApiError> {
    // A bare `null` body carries no text, same as `{}`.
    let request: Option<SummarizeRequest> = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting malformed body");
        ApiError::InvalidJson(e)
    })?;
    let request = request.unwrap_or_default();

    let input = request.text().trim();
    if input.is_empty() {
        return Err(ApiError::TextRequired);
    }

    match state.summarizer.summarize(input).await {
        Ok(summary) => Ok(Json(SummarizeResponse { summary })),
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "summarize error");
            metrics::record_summarize_failure(e.kind());
            Err(e.into())
        }
    }
}
