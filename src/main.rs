//! Text Summarization Relay
//!
//! Accepts free text over HTTP, asks Gemini for a three-line summary and
//! returns it as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 SUMMARIZE RELAY              │
//!  POST /summarize       │  ┌──────────┐   ┌──────────┐   ┌───────────┐ │
//!  ──────────────────────┼─▶│access log│──▶│ handlers │──▶│summarizer │─┼──▶ Gemini
//!                        │  │ + CORS   │   │ validate │   │ prompt +  │ │    generateContent
//!  ◀─────────────────────┼──│          │◀──│ respond  │◀──│ truncate  │◀┼───
//!  {"summary"}/{"error"} │  └──────────┘   └──────────┘   └───────────┘ │
//!                        │                                              │
//!                        │  config · observability · lifecycle          │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use summarize_relay::http::HttpServer;
use summarize_relay::lifecycle::{log_config, prepare_config, shutdown_signal, Shutdown};
use summarize_relay::observability::{init_logging, metrics};

#[derive(Parser)]
#[command(name = "summarize-relay")]
#[command(about = "HTTP relay that summarizes text with Gemini", long_about = None)]
struct Args {
    /// Optional TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = prepare_config(args.config.as_deref(), args.bind.as_deref())?;

    init_logging(&config.observability);
    tracing::info!("summarize-relay v{} starting", env!("CARGO_PKG_VERSION"));
    log_config(&config);

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Backend running"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    let signals = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signals.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
