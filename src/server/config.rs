//! Environment configuration.

use crate::server::error::config::ConfigError;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Interpreter used by `piste-etl fetch` when `OVERPASS_URL` is not set
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Server settings read from the environment
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// Valkey/Redis URL of the session store
    pub valkey_url: String,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl Config {
    /// Reads `DATABASE_URL`, `VALKEY_URL` and `PORT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            port: parse_port(std::env::var("PORT").ok())?,
        })
    }
}

/// Interpreter URL from `OVERPASS_URL`, falling back to [`DEFAULT_OVERPASS_URL`]
pub fn overpass_url() -> String {
    std::env::var("OVERPASS_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_OVERPASS_URL.to_string())
}

/// Reads a variable that must be present and non-empty
pub fn required_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_PORT);
    };

    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "PORT".to_string(),
            reason: e.to_string(),
        })
}
