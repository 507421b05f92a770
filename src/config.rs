use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_FILE: &str = "cricketMatchDetails.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    InvalidHost(String),

    #[error("PORT is not the correct format: {0}")]
    InvalidPort(String),

    #[error("DATABASE_MAX_CONNECTIONS must be a positive integer: {0}")]
    InvalidMaxConnections(String),
}

/// Runtime settings. Every field has a default so the service starts with no
/// environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    /// Load from the process environment, after merging a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => Ipv4Addr::UNSPECIFIED,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            },
            None => 1,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

/// Directory holding the running executable, falling back to the working
/// directory when it cannot be resolved.
pub fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

// The database file is installed next to the binary.
fn default_database_url() -> String {
    format!("sqlite://{}", install_dir().join(DEFAULT_DB_FILE).display())
}
