use std::env;
use std::fmt;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("unsupported database driver: {0}")]
    UnsupportedDriver(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DbDriver {
    Sqlite,
    Postgres,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub driver: DbDriver,
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct WebServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

// Keeps the secret out of logs.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub db: DatabaseConfig,
    pub web: WebServerConfig,
    pub jwt: JwtConfig,
}

impl EnvConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    /// Variables already set in the environment win over the file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let driver = match require("DB_DRIVER")?.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => DbDriver::Sqlite,
            "postgres" | "postgresql" => DbDriver::Postgres,
            other => return Err(ConfigError::UnsupportedDriver(other.to_string())),
        };

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: v })?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let port = match get("WEB_SERVER_PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "WEB_SERVER_PORT", value: v })?,
            None => DEFAULT_PORT,
        };

        let secret = require("JWT_SECRET")?;
        let expires_raw = require("JWT_EXPIRES_IN")?;
        let expires_in = expires_raw
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::Invalid { key: "JWT_EXPIRES_IN", value: expires_raw })?;

        Ok(EnvConfig {
            db: DatabaseConfig {
                driver,
                host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: get("DB_PORT").unwrap_or_else(|| "5432".to_string()),
                user: get("DB_USER").unwrap_or_default(),
                password: get("DB_PASSWORD").unwrap_or_default(),
                name: require("DB_NAME")?,
                max_connections,
            },
            web: WebServerConfig {
                host: get("WEB_SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            jwt: JwtConfig { secret, expires_in },
        })
    }
}

impl DatabaseConfig {
    /// In-memory SQLite with a single pooled connection, for tests.
    pub fn sqlite_memory() -> Self {
        DatabaseConfig {
            driver: DbDriver::Sqlite,
            host: String::new(),
            port: String::new(),
            user: String::new(),
            password: String::new(),
            name: ":memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn url(&self) -> String {
        match self.driver {
            DbDriver::Sqlite if self.name == ":memory:" => "sqlite::memory:".to_string(),
            DbDriver::Sqlite => format!("sqlite://{}?mode=rwc", self.name),
            DbDriver::Postgres => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

impl WebServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
