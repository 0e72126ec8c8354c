//! rosterd settings.
//!
//! Read from `roster.toml` in the working directory when it exists, then
//! overridden by `ROSTER_*` variables and `RUST_LOG`. With neither present the
//! daemon listens on `0.0.0.0:8000` and keeps its data in `./employees.db`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_FILE: &str = "roster.toml";

/// Settings for one rosterd process.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP API listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Location of the employee database.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx` `SQLite` URL; `mode=rwc` lets the file be created on first start.
    pub url: String,
}

/// `tracing-subscriber` filter for the daemon's logs.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directive in `RUST_LOG` syntax.
    pub filter: String,
}

impl Config {
    /// Settings from `roster.toml` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `roster.toml` exists but cannot be read or
    /// parsed, or when the final port is zero.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Read `path` (absent means defaults), apply `var` overrides, validate.
    fn resolve(path: &Path, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        config.apply_overrides(var);
        if config.server.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        Ok(config)
    }

    /// `ROSTER_BIND` (`host:port`) wins over `ROSTER_HOST`/`ROSTER_PORT`;
    /// `RUST_LOG` wins over `ROSTER_LOG`. A port that does not parse is ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        let bind = var("ROSTER_BIND");
        let bind = bind.as_deref().and_then(|val| val.rsplit_once(':'));

        if let Some(host) = bind.map(|(host, _)| host.to_string()).or_else(|| var("ROSTER_HOST")) {
            self.server.host = host;
        }
        let port = bind
            .and_then(|(_, port)| port.parse().ok())
            .or_else(|| var("ROSTER_PORT").and_then(|port| port.parse().ok()));
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(url) = var("ROSTER_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("ROSTER_LOG")) {
            self.logging.filter = filter;
        }
    }

    /// `host:port` handed to the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Storage adapter settings for the configured database.
    #[must_use]
    pub fn storage(&self) -> roster_adapter_storage_sqlite_sqlx::Config {
        roster_adapter_storage_sqlite_sqlx::Config {
            database_url: self.database.url.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:employees.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rosterd=info,roster=info,tower_http=debug".to_string(),
        }
    }
}

/// Why settings could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("server port must be non-zero")]
    ZeroPort,
}
