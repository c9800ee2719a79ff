//! Process configuration.
//!
//! Loaded from an optional JSON file, then overridden from the environment
//! (`.env` is read first by the CLI).

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{fmt as subscriber_fmt, EnvFilter};

use crate::http_server::HttpServerConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Deployment environment. Only production hides failure details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Development,
    Test,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
            Environment::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            other => Err(ConfigError::InvalidValue {
                field: "environment",
                reason: format!("unknown environment '{}'", other),
            }),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` overrides `level`.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            "json" => subscriber_fmt().json().with_env_filter(filter).try_init(),
            _ => subscriber_fmt().with_env_filter(filter).try_init(),
        };
        if result.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database path (default: "bookmarks.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Deployment environment (default: development)
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_database_url() -> String {
    "bookmarks.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            environment: Environment::default(),
            server: HttpServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path` (if given) and apply process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a JSON config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Apply overrides from `HOST`, `PORT`, `DATABASE_URL` and `APP_ENV`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "port",
                reason: format!("'{}' is not a valid port", port),
            })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(env) = lookup("APP_ENV") {
            self.environment = env.parse()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database_url, "bookmarks.db");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json_str(
            r#"{"environment": "production", "server": {"port": 9000}}"#,
        )
        .unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database_url, "bookmarks.db");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(lookup(&[
                ("PORT", "8080"),
                ("DATABASE_URL", "/tmp/b.db"),
                ("APP_ENV", "production"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database_url, "/tmp/b.db");
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = Config::default();
        let err = config.apply_env(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "port", .. }));
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("PRODUCTION".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert!("staging".parse::<Environment>().is_err());
    }
}
