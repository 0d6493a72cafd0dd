use chrono::{Duration, Utc};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,

    /// Secret used to sign and verify identity tokens.
    pub jwt_secret: String,
    /// How long an issued token stays valid.
    pub token_ttl: Duration,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_ttl = token_ttl(optional_env("TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?)?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_ttl,
            port: optional_env("PORT", DEFAULT_PORT)?,
        })
    }
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn optional_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Converts the configured token lifetime into a `Duration`.
///
/// The lifetime must be positive and small enough that a token issued now still has a
/// representable expiry.
fn token_ttl(hours: i64) -> Result<Duration, ConfigError> {
    Duration::try_hours(hours)
        .filter(|ttl| *ttl > Duration::zero())
        .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "TOKEN_TTL_HOURS".to_string(),
            value: hours.to_string(),
        })
}
