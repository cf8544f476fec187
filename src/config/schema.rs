//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the summarize relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// CORS headers attached to every response.
    pub cors: CorsConfig,

    /// Upstream generative-language provider.
    pub provider: ProviderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Request limits.
    pub limits: LimitsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:4001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:4001".to_string(),
        }
    }
}

/// Fixed CORS policy. A single allowed origin, no per-request negotiation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Value of `Access-Control-Allow-Origin`.
    pub allow_origin: String,

    /// Value of `Access-Control-Allow-Methods`.
    pub allow_methods: String,

    /// Value of `Access-Control-Allow-Headers`.
    pub allow_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "http://localhost:3000".to_string(),
            allow_methods: "POST, OPTIONS".to_string(),
            allow_headers: "Content-Type, Authorization".to_string(),
        }
    }
}

/// Generative-language provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider base URL, without the `/v1beta/...` suffix.
    pub base_url: String,

    /// Model name used for generation.
    pub model: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Ignore system proxy settings for provider calls.
    pub no_proxy: bool,

    /// Resolved API key. Never read from or written to config files.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            no_proxy: false,
            api_key: None,
        }
    }
}

impl ProviderConfig {
    /// True when a non-blank API key has been resolved.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_setup() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:4001");
        assert_eq!(config.cors.allow_origin, "http://localhost:3000");
        assert_eq!(config.provider.model, "gemini-2.5-flash");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: RelayConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:5000"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:5000");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.cors.allow_methods, "POST, OPTIONS");
        assert_eq!(config.limits.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn api_key_is_never_deserialized() {
        let config: RelayConfig = toml::from_str(
            r#"
            [provider]
            api_key = "from-file"
            "#,
        )
        .unwrap();
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn blank_api_key_is_missing() {
        let mut provider = ProviderConfig::default();
        assert!(!provider.has_api_key());
        provider.api_key = Some("   ".into());
        assert!(!provider.has_api_key());
        provider.api_key = Some("secret".into());
        assert!(provider.has_api_key());
    }
}
