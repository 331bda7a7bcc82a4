use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let data_dir = PathBuf::from(or_default("PRICEWATCH_DATA_DIR", "./storage/database"));
    let products_path = PathBuf::from(or_default(
        "PRICEWATCH_PRODUCTS_PATH",
        "./config/products.json",
    ));
    let log_level = or_default("PRICEWATCH_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PRICEWATCH_REQUEST_TIMEOUT_SECS", "120")?;
    let element_wait_timeout_secs = parse_u64("PRICEWATCH_WAIT_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "PRICEWATCH_USER_AGENT",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    );
    let max_concurrent_extractions = parse_usize("PRICEWATCH_MAX_CONCURRENT", "4")?;

    Ok(AppConfig {
        data_dir,
        products_path,
        log_level,
        request_timeout_secs,
        element_wait_timeout_secs,
        user_agent,
        max_concurrent_extractions,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from<'a>(
        map: &'a HashMap<&str, &str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| map.get(key).map(|v| (*v).to_string()).ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let env = HashMap::new();
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./storage/database"));
        assert_eq!(config.products_path, PathBuf::from("./config/products.json"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.element_wait_timeout_secs, 30);
        assert_eq!(config.max_concurrent_extractions, 4);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let env = HashMap::from([
            ("PRICEWATCH_DATA_DIR", "/var/lib/pricewatch"),
            ("PRICEWATCH_LOG_LEVEL", "debug"),
            ("PRICEWATCH_WAIT_TIMEOUT_SECS", "5"),
            ("PRICEWATCH_MAX_CONCURRENT", "16"),
        ]);
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/pricewatch"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.element_wait_timeout_secs, 5);
        assert_eq!(config.max_concurrent_extractions, 16);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let env = HashMap::from([("PRICEWATCH_REQUEST_TIMEOUT_SECS", "soon")]);
        let err = build_app_config(lookup_from(&env)).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PRICEWATCH_REQUEST_TIMEOUT_SECS")
        );
    }

    #[test]
    fn invalid_concurrency_is_rejected() {
        let env = HashMap::from([("PRICEWATCH_MAX_CONCURRENT", "-2")]);
        let err = build_app_config(lookup_from(&env)).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PRICEWATCH_MAX_CONCURRENT")
        );
    }
}
