//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageBackend,
    /// Present when `storage` is `postgres`
    pub database: Option<DatabaseConfig>,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub snowflake: SnowflakeConfig,
    pub voting: VotingConfig,
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
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
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

/// Where votes, targets and reputation are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local store; contents are lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidValue("STORAGE_BACKEND", s.to_string())),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup
    #[serde(default)]
    pub run_migrations: bool,
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

/// Which vote rows feed the `voteResult` returned after casting a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TallyScope {
    /// Only the acting voter's own votes on the target
    #[default]
    Voter,
    /// Every vote on the target
    Global,
}

impl FromStr for TallyScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "voter" => Ok(Self::Voter),
            "global" => Ok(Self::Global),
            _ => Err(ConfigError::InvalidValue("VOTE_TALLY_SCOPE", s.to_string())),
        }
    }
}

/// Voting behaviour
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct VotingConfig {
    #[serde(default)]
    pub tally_scope: TallyScope,
}

// Default value functions
fn default_app_name() -> String {
    "qa-vote".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_migrations_dir() -> String {
    "./migrations".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let number = |key: &'static str| -> Result<Option<u32>, ConfigError> {
            var(key)
                .map(|v| {
                    v.trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue(key, v.clone()))
                })
                .transpose()
        };

        let storage = var("STORAGE_BACKEND")
            .map(|v| v.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or_default();

        let database = match storage {
            StorageBackend::Postgres => Some(DatabaseConfig {
                url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: number("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: number("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                run_migrations: var("DATABASE_RUN_MIGRATIONS")
                    .map(|v| parse_bool("DATABASE_RUN_MIGRATIONS", &v))
                    .transpose()?
                    .unwrap_or(false),
                migrations_dir: var("MIGRATIONS_DIR").unwrap_or_else(default_migrations_dir),
            }),
            StorageBackend::Memory => None,
        };

        let worker_id = match number("WORKER_ID")? {
            Some(id) if id <= u32::from(qa_core::Snowflake::MAX_WORKER_ID) => id as u16,
            Some(id) => return Err(ConfigError::InvalidValue("WORKER_ID", id.to_string())),
            None => 0,
        };

        let port_raw = var("API_PORT").ok_or(ConfigError::MissingVar("API_PORT"))?;
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("API_PORT", port_raw.clone()))?;

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .map(|v| v.parse::<Environment>())
                    .transpose()?
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port,
            },
            storage,
            database,
            rate_limit: RateLimitConfig {
                requests_per_second: number("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: number("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            snowflake: SnowflakeConfig { worker_id },
            voting: VotingConfig {
                tally_scope: var("VOTE_TALLY_SCOPE")
                    .map(|v| v.parse::<TallyScope>())
                    .transpose()?
                    .unwrap_or_default(),
            },
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key, value.to_string())),
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_environment_flags() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Development.is_development());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = load(&[("API_PORT", "3000")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn test_memory_backend_defaults() {
        let config = load(&[("API_PORT", "3000"), ("STORAGE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.database.is_none());
        assert_eq!(config.app.name, "qa-vote");
        assert_eq!(config.app.env, Environment::Development);
        assert_eq!(config.voting.tally_scope, TallyScope::Voter);
        assert_eq!(config.rate_limit.burst, 50);
        assert_eq!(config.snowflake.worker_id, 0);
    }

    #[test]
    fn test_postgres_settings() {
        let config = load(&[
            ("API_PORT", "3000"),
            ("DATABASE_URL", "postgres://localhost/qa"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("DATABASE_RUN_MIGRATIONS", "true"),
            ("VOTE_TALLY_SCOPE", "global"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("APP_ENV", "Production"),
        ])
        .unwrap();

        let db = config.database.unwrap();
        assert_eq!(db.url, "postgres://localhost/qa");
        assert_eq!(db.max_connections, 4);
        assert_eq!(db.min_connections, 5);
        assert!(db.run_migrations);
        assert_eq!(db.migrations_dir, "./migrations");
        assert_eq!(config.voting.tally_scope, TallyScope::Global);
        assert_eq!(config.cors.allowed_origins.len(), 2);
        assert!(config.app.env.is_production());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = load(&[("API_PORT", "http"), ("STORAGE_BACKEND", "memory")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("API_PORT", _)));

        let err = load(&[
            ("API_PORT", "3000"),
            ("STORAGE_BACKEND", "memory"),
            ("VOTE_TALLY_SCOPE", "everyone"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("VOTE_TALLY_SCOPE", _)));

        let err = load(&[
            ("API_PORT", "3000"),
            ("STORAGE_BACKEND", "memory"),
            ("WORKER_ID", "5000"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("WORKER_ID", _)));

        let err = load(&[("API_PORT", "3000"), ("STORAGE_BACKEND", "sqlite")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("STORAGE_BACKEND", _)));
    }
}
