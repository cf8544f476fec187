//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for `/summarize`
//! - Wire up middleware (tracing, request ID, access log, CORS, body limit)
//! - Inject the gateway into handler state
//! - Serve until the shutdown signal fires

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit, http::header::InvalidHeaderValue, middleware, routing::post, Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::handlers::{preflight, summarize};
use crate::http::middleware::{access_log, CorsHeaders};
use crate::http::request::MakeRequestUuid;
use crate::provider::{ContentGenerator, GeminiGenerator};
use crate::summarizer::Summarizer;

/// Errors building the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid CORS header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Summarizer,
}

/// HTTP server for the summarize relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server that calls Gemini with the configured credential.
    pub fn new(config: RelayConfig) -> Result<Self, ServerError> {
        let generator = Arc::new(GeminiGenerator::from_config(&config.provider));
        Self::with_generator(config, generator)
    }

    /// Create a server backed by an arbitrary provider.
    pub fn with_generator(
        config: RelayConfig,
        generator: Arc<dyn ContentGenerator>,
    ) -> Result<Self, ServerError> {
        let state = AppState {
            summarizer: Summarizer::new(config.provider.api_key.clone(), generator),
        };

        let router = Self::build_router(&config, state)?;
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Result<Router, ServerError> {
        let cors = CorsHeaders::from_config(&config.cors)?;

        let router = Router::new()
            .route("/summarize", post(summarize).options(preflight))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes));

        Ok(cors
            .apply(router)
            .layer(middleware::from_fn(access_log))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http()))
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
