/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables. Configuration is read exactly once at process start; there
 * is no hot reload.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - PostgreSQL connection string
 * - `JWT_SECRET` (required) - Token signing secret
 * - `TOKEN_LIFETIME` (default `1d`) - Token lifetime, number + unit
 *   suffix (`s`, `m`, `h`, `d`)
 * - `PORT` (default `8080`) - Listen port
 * - `REQUEST_TIMEOUT` (default `30s`) - Per-request timeout, same format
 *   as `TOKEN_LIFETIME`
 *
 * # Error Handling
 *
 * Unlike optional services, the database and the signing secret are hard
 * requirements; a missing or malformed variable fails startup with a
 * [`ConfigError`] rather than limping along without auth.
 */

use std::time::Duration;

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable `{0}`")]
    MissingVar(&'static str),

    /// A duration string did not parse
    #[error("invalid duration `{value}` for `{name}` (expected e.g. `30s`, `15m`, `12h`, `1d`)")]
    InvalidDuration { name: &'static str, value: String },

    /// The port did not parse as a number
    #[error("invalid port `{0}`")]
    InvalidPort(String),
}

/// Server configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// How long issued tokens stay valid
    pub token_lifetime: Duration,
    /// Per-request timeout applied to the whole router
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails if `DATABASE_URL` or `JWT_SECRET` is unset, or if any
    /// duration or port value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8080,
        };

        let token_lifetime = duration_var("TOKEN_LIFETIME", Duration::from_secs(24 * 60 * 60))?;
        let request_timeout = duration_var("REQUEST_TIMEOUT", Duration::from_secs(30))?;

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            token_lifetime,
            request_timeout,
        })
    }
}

fn duration_var(name: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => parse_duration(&raw).ok_or(ConfigError::InvalidDuration {
            name,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

/// Parse a duration string of the form `<number><unit>`
///
/// Units are `s` (seconds), `m` (minutes), `h` (hours), `d` (days).
/// A bare number is taken as seconds. Zero is rejected.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let (digits, multiplier) = match raw.char_indices().last()? {
        (idx, 's') => (&raw[..idx], 1),
        (idx, 'm') => (&raw[..idx], 60),
        (idx, 'h') => (&raw[..idx], 60 * 60),
        (idx, 'd') => (&raw[..idx], 24 * 60 * 60),
        _ => (raw, 1),
    };

    let count: u64 = digits.parse().ok()?;
    if count == 0 {
        return None;
    }

    count.checked_mul(multiplier).map(Duration::from_secs)
}
