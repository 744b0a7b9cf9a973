//! Application configuration.
//!
//! `AppConfig` is built once at startup and handed to the server; nothing reads the
//! environment after that. Values come from environment variables (optionally seeded by
//! a `.env` file) or, when `APP_CONFIG` names a file, from that TOML file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Connection string used when neither `CONNECTION_STRING` nor `DATABASE_URL` is set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://sensors.sqlite?mode=rwc";

/// Address the HTTP server binds to when `BIND_ADDRESS` is not set.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Name greeted by the `/pagina` page when `PAGE_USER` is not set.
pub const DEFAULT_PAGE_USER: &str = "Carlos";

/// Immutable server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Database connection string (`postgres://...` or `sqlite://...`)
    pub database_url: String,
    /// Socket address for the HTTP listener
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Name rendered on the `/pagina` page
    #[serde(default = "default_page_user")]
    pub page_user: String,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_page_user() -> String {
    DEFAULT_PAGE_USER.to_string()
}

impl AppConfig {
    /// Builds a configuration from a variable lookup function.
    ///
    /// `CONNECTION_STRING` takes precedence over `DATABASE_URL`; unset values fall
    /// back to the defaults in this module.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("CONNECTION_STRING")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(default_bind_address),
            page_user: lookup("PAGE_USER").unwrap_or_else(default_page_user),
        }
    }

    /// Builds a configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Loads the configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML for [`AppConfig`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file {}: {e}", path_ref.display()),
    })
}

/// Loads the configuration the server starts with.
///
/// Uses the TOML file named by `APP_CONFIG` when set, the environment otherwise.
pub fn load_app_configuration() -> Result<AppConfig> {
    match std::env::var("APP_CONFIG") {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            load_config(path)
        }
        Err(_) => {
            info!("Loading configuration from environment");
            Ok(AppConfig::from_env())
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.page_user, DEFAULT_PAGE_USER);
    }

    #[test]
    fn test_connection_string_wins_over_database_url() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CONNECTION_STRING", "postgres://u:p@db/sensors"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
        ]));
        assert_eq!(config.database_url, "postgres://u:p@db/sensors");
        assert_eq!(config.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn test_database_url_fallback() {
        let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")]));
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_str = r#"
            database_url = "postgres://localhost/sensors"
            page_user = "Ana"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/sensors");
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.page_user, "Ana");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
