use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_BCRYPT_COST: u32 = 10;
/// Work factors bcrypt accepts.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

pub struct Config {
    pub database_url: String,

    pub bind_address: SocketAddr,
    /// Directory product images are written to and served from under `/uploads`
    pub upload_dir: PathBuf,
    pub bcrypt_cost: u32,

    /// Mark the session cookie `Secure`; enable behind HTTPS
    pub session_secure: bool,
    /// Origin allowed to call the API with credentials, if any
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: parse_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            upload_dir: PathBuf::from(
                std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            bcrypt_cost: check_bcrypt_cost(parse_var(
                "BCRYPT_COST",
                &DEFAULT_BCRYPT_COST.to_string(),
            )?)?,
            session_secure: parse_var("SESSION_SECURE", "false")?,
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|v| !v.is_empty()),
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    value.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value,
    })
}

/// Checks the bcrypt work factor is one bcrypt accepts.
fn check_bcrypt_cost(cost: u32) -> Result<u32, ConfigError> {
    if !BCRYPT_COST_RANGE.contains(&cost) {
        return Err(ConfigError::InvalidValue {
            name: "BCRYPT_COST".to_string(),
            value: cost.to_string(),
        });
    }

    Ok(cost)
}
