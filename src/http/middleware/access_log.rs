//! Per-request access log.
//!
//! Wraps any router or handler and emits one line per request with method,
//! path, status, elapsed time, remote address and response size. The
//! response passes through untouched.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::HttpBody,
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

use crate::http::request::request_id;
use crate::observability::metrics;

/// What the client was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseRecord {
    pub status: u16,
    pub bytes: u64,
}

impl ResponseRecord {
    /// Status and body size of `response`.
    ///
    /// Buffered bodies report their exact length; streaming bodies report
    /// their lower size bound.
    pub fn capture<B: HttpBody>(response: &Response<B>) -> Self {
        let hint = response.body().size_hint();
        Self {
            status: response.status().as_u16(),
            bytes: hint.exact().unwrap_or_else(|| hint.lower()),
        }
    }
}

pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request_id(request.headers()).to_owned();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(request).await;

    let record = ResponseRecord::capture(&response);
    let elapsed = start.elapsed();

    tracing::info!(
        method = %method,
        path = %path,
        status = record.status,
        duration = ?elapsed,
        remote_addr = %remote_addr,
        bytes = record.bytes,
        request_id = %request_id,
        "{} {} {} {:?} {} bytes={}",
        method,
        path,
        record.status,
        elapsed,
        remote_addr,
        record.bytes
    );
    metrics::record_request(method.as_str(), record.status, start);

    response
}
