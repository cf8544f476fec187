//! Shared utilities for integration and load testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use summarize_relay::config::RelayConfig;
use summarize_relay::http::HttpServer;
use summarize_relay::lifecycle::Shutdown;

/// A request the mock provider received.
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub api_key: Option<String>,
    pub body: Value,
}

impl ReceivedCall {
    /// The prompt text sent in the first part.
    #[allow(dead_code)]
    pub fn prompt(&self) -> &str {
        self.body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
    }
}

struct MockState<F> {
    respond: Arc<F>,
    calls: Arc<Mutex<Vec<ReceivedCall>>>,
}

impl<F> Clone for MockState<F> {
    fn clone(&self) -> Self {
        Self {
            respond: self.respond.clone(),
            calls: self.calls.clone(),
        }
    }
}

/// Handle to a running mock Gemini backend.
pub struct MockProvider {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<ReceivedCall>>>,
}

impl MockProvider {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<ReceivedCall> {
        self.calls.lock().unwrap().clone()
    }
}

/// Gemini-shaped success body with one candidate per entry in `candidates`,
/// each entry split into parts.
#[allow(dead_code)]
pub fn gemini_answer(candidates: &[&[&str]]) -> Value {
    let candidates: Vec<Value> = candidates
        .iter()
        .map(|parts| {
            let parts: Vec<Value> = parts.iter().map(|t| json!({ "text": t })).collect();
            json!({ "content": { "role": "model", "parts": parts } })
        })
        .collect();
    json!({ "candidates": candidates })
}

/// Start a programmable mock provider on an ephemeral port.
pub async fn start_mock_provider<F, Fut>(respond: F) -> MockProvider
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, Value)> + Send + 'static,
{
    async fn handler<F, Fut>(
        State(state): State<MockState<F>>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>)
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = (u16, Value)> + Send + 'static,
    {
        state.calls.lock().unwrap().push(ReceivedCall {
            api_key: headers
                .get("x-goog-api-key")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: body.clone(),
        });
        let (status, reply) = (state.respond)(body).await;
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(reply),
        )
    }

    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        respond: Arc::new(respond),
        calls: calls.clone(),
    };
    let app = Router::new()
        .route("/v1beta/models/{*rest}", post(handler::<F, Fut>))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockProvider { addr, calls }
}

/// A local address nothing is listening on.
#[allow(dead_code)]
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Relay config pointing at `base_url`, with an API key set.
pub fn relay_config(base_url: &str) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.provider.base_url = base_url.to_string();
    config.provider.api_key = Some("test-key".into());
    config.provider.no_proxy = true;
    config
}

/// Start the relay on an ephemeral port. Trigger the returned `Shutdown` to stop it.
pub async fn start_relay(config: RelayConfig) -> (SocketAddr, Shutdown) {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}
