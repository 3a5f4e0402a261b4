//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageConfig,
    pub share: ShareConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidValue("APP_ENV", s.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where interest records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-process store, lost on restart
    #[default]
    Memory,
    /// PostgreSQL via `DATABASE_URL`
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConfigError::InvalidValue("STORAGE_BACKEND", s.to_string())),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Required when `backend` is `Postgres`
    pub database: Option<DatabaseConfig>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Sharing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Base URL of the public site, used to build content permalinks
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,
    /// Trailing window counted as "recent" in share statistics
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,
    #[serde(default = "default_popup_width")]
    pub popup_width: u32,
    #[serde(default = "default_popup_height")]
    pub popup_height: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            site_base_url: default_site_base_url(),
            recent_window_days: default_recent_window_days(),
            popup_width: default_popup_width(),
            popup_height: default_popup_height(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "pianodir".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_run_migrations() -> bool {
    true
}

fn default_site_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Largest accepted `SHARE_RECENT_WINDOW_DAYS` (about a century).
pub const MAX_RECENT_WINDOW_DAYS: i64 = 36_500;

fn default_recent_window_days() -> i64 {
    pianodir_core::DEFAULT_RECENT_WINDOW_DAYS
}

fn default_popup_width() -> u32 {
    600
}

fn default_popup_height() -> u32 {
    400
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required keys are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &'static str| -> Result<Option<i64>, ConfigError> {
            lookup(key)
                .map(|v| v.parse::<i64>().map_err(|_| ConfigError::InvalidValue(key, v)))
                .transpose()
        };
        let parsed_u32 = |key: &'static str, default: u32| -> Result<u32, ConfigError> {
            lookup(key)
                .map(|v| v.parse::<u32>().map_err(|_| ConfigError::InvalidValue(key, v)))
                .transpose()
                .map(|v| v.unwrap_or(default))
        };

        let backend = lookup("STORAGE_BACKEND")
            .map(|s| s.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or_default();

        let database = match lookup("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parsed_u32("DATABASE_MAX_CONNECTIONS", default_max_connections())?,
                min_connections: parsed_u32("DATABASE_MIN_CONNECTIONS", default_min_connections())?,
                run_migrations: lookup("DATABASE_RUN_MIGRATIONS")
                    .map(|s| {
                        s.parse::<bool>()
                            .map_err(|_| ConfigError::InvalidValue("DATABASE_RUN_MIGRATIONS", s))
                    })
                    .transpose()?
                    .unwrap_or_else(default_run_migrations),
            }),
            None if backend == StorageBackend::Postgres => {
                return Err(ConfigError::MissingVar("DATABASE_URL"));
            }
            None => None,
        };

        let recent_window_days = parsed("SHARE_RECENT_WINDOW_DAYS")?
            .unwrap_or_else(default_recent_window_days);
        if !(1..=MAX_RECENT_WINDOW_DAYS).contains(&recent_window_days) {
            return Err(ConfigError::InvalidValue(
                "SHARE_RECENT_WINDOW_DAYS",
                recent_window_days.to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| s.parse::<Environment>().ok())
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: lookup("API_PORT")
                    .ok_or(ConfigError::MissingVar("API_PORT"))?
                    .parse::<u16>()
                    .map_err(|e| ConfigError::InvalidValue("API_PORT", e.to_string()))?,
            },
            storage: StorageConfig { backend, database },
            share: ShareConfig {
                site_base_url: lookup("SITE_BASE_URL").unwrap_or_else(default_site_base_url),
                recent_window_days,
                popup_width: parsed_u32("SHARE_POPUP_WIDTH", default_popup_width())?,
                popup_height: parsed_u32("SHARE_POPUP_HEIGHT", default_popup_height())?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parsed_u32(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second(),
                )?,
                burst: parsed_u32("RATE_LIMIT_BURST", default_burst())?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }

    /// In-memory configuration bound to the given port, with defaults elsewhere
    #[must_use]
    pub fn in_memory(port: u16) -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::Development,
            },
            api: ServerConfig {
                host: default_host(),
                port,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                database: None,
            },
            share: ShareConfig::default(),
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
