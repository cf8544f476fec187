//! Startup orchestration.
//!
//! Config file (or defaults) → CLI overrides → validation → API key from
//! `.env`/environment. A missing key is not fatal: the relay starts and
//! each request fails with a configuration error until one is provided.

use std::path::Path;

use crate::config::validation::validate_config;
use crate::config::{load_config, load_dotenv, resolve_api_key, ConfigError, RelayConfig};

/// Build the runtime configuration.
pub fn prepare_config(
    config_path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<RelayConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    load_dotenv();
    resolve_api_key(&mut config);

    Ok(config)
}

/// Log the effective configuration; warns when the API key is missing.
pub fn log_config(config: &RelayConfig) {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        allow_origin = %config.cors.allow_origin,
        model = %config.provider.model,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if !config.provider.has_api_key() {
        tracing::warn!(
            env = %config.provider.api_key_env,
            "API key is empty. Set it in the environment or in .env at project root."
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config_file() {
        let config = prepare_config(None, None).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:4001");
    }

    #[test]
    fn bind_override_is_validated() {
        let config = prepare_config(None, Some("127.0.0.1:5001")).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:5001");

        let err = prepare_config(None, Some("localhost")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
