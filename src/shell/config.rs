use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

pub const HOST_KEY: &str = "TRAINING_HOST";
pub const PORT_KEY: &str = "TRAINING_PORT";
pub const LOG_KEY: &str = "TRAINING_LOG";
pub const CORS_KEY: &str = "TRAINING_CORS_PERMISSIVE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
    pub cors_permissive: bool,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse(&lookup, HOST_KEY, IpAddr::from([0, 0, 0, 0]), |v| v.parse().ok())?;
        let port = parse(&lookup, PORT_KEY, 8000u16, |v| v.parse().ok())?;
        let cors_permissive = parse(&lookup, CORS_KEY, false, |v| {
            match v.to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            }
        })?;
        let log_filter = lookup(LOG_KEY).unwrap_or_else(|| "info".to_string());

        Ok(Self {
            host,
            port,
            log_filter,
            cors_permissive,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T, L, P>(lookup: &L, key: &'static str, default: T, convert: P) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => convert(value.trim()).ok_or(ConfigError::Invalid { key, value }),
    }
}
