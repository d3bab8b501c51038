//! Server configuration from environment variables.

use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use http::HeaderValue;
use notehub_store::{StoreConfig, StoreError};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5555;

/// Default directory for static assets.
pub const DEFAULT_STATIC_DIR: &str = "client";

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: any origin.
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated list of origins.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw == "*" {
            return Ok(Self::Any);
        }

        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                HeaderValue::from_str(s).map_err(|_| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("invalid origin {:?}", s),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: "no origins given".to_string(),
            });
        }

        Ok(Self::List(origins))
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins.
    pub cors_allowed_origins: CorsOrigins,
    /// Directory served for paths no route matches.
    pub static_dir: PathBuf,
    /// Document store settings.
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to a
    /// `.env` file (searched from the working directory upwards) for
    /// variables the environment does not set. A missing file is fine.
    ///
    /// Required:
    /// - `DATABASE_URL` (or `DB_URL`): Document store connection string
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 5555)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `STATIC_DIR`: Static asset directory (default: "client")
    ///
    /// Pool and retry settings are read by [`StoreConfig::from_lookup`].
    pub fn load() -> Result<Self, ConfigError> {
        let file = match dotenvy::dotenv_iter() {
            Ok(iter) => collect_env_file(iter)?,
            Err(e) if e.not_found() => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Self::from_layers(|key| env::var(key).ok(), &file)
    }

    /// Resolve each key from `env` first, then from `file`.
    pub fn from_layers(
        env: impl Fn(&str) -> Option<String>,
        file: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env(key).or_else(|| file.get(key).cloned()))
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = StoreConfig::from_lookup(&lookup)?;

        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("{:?} is not a port number", raw),
            })?,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let cors_allowed_origins =
            CorsOrigins::parse(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()))?;

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            port,
            log_level,
            cors_allowed_origins,
            static_dir,
            store,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Read `KEY=value` pairs from a dotenv file without touching the process
/// environment.
pub fn read_env_file(path: impl AsRef<Path>) -> Result<HashMap<String, String>, ConfigError> {
    collect_env_file(dotenvy::from_path_iter(path)?)
}

fn collect_env_file(iter: dotenvy::Iter<File>) -> Result<HashMap<String, String>, ConfigError> {
    Ok(iter.collect::<Result<HashMap<_, _>, _>>()?)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    /// Store settings are missing or invalid.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The `.env` file exists but cannot be read or parsed.
    #[error("failed to read .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
