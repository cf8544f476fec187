//! Fixed CORS response headers.
//!
//! The relay serves a single known frontend, so the same four headers go on
//! every response (including errors and 405s) instead of per-request origin
//! negotiation.

use axum::{
    http::{header, header::InvalidHeaderValue, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CorsConfig;

#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
}

impl CorsHeaders {
    pub fn from_config(config: &CorsConfig) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(&config.allow_origin)?,
            allow_methods: HeaderValue::from_str(&config.allow_methods)?,
            allow_headers: HeaderValue::from_str(&config.allow_headers)?,
        })
    }

    /// Layer `router` so every response carries the CORS headers.
    pub fn apply<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                self.allow_origin,
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::VARY,
                HeaderValue::from_static("Origin"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                self.allow_methods,
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                self.allow_headers,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::post};
    use tower::ServiceExt;

    fn app() -> Router {
        let cors = CorsHeaders::from_config(&CorsConfig::default()).unwrap();
        cors.apply(Router::new().route("/summarize", post(|| async { "ok" })))
    }

    #[tokio::test]
    async fn headers_on_success() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/summarize")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "http://localhost:3000");
        assert_eq!(headers["vary"], "Origin");
        assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
        assert_eq!(
            headers["access-control-allow-headers"],
            "Content-Type, Authorization"
        );
    }

    #[tokio::test]
    async fn headers_on_method_not_allowed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/summarize")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:3000"
        );
    }

    #[test]
    fn rejects_invalid_header_value() {
        let config = CorsConfig {
            allow_origin: "bad\r\nvalue".into(),
            ..CorsConfig::default()
        };
        assert!(CorsHeaders::from_config(&config).is_err());
    }
}
