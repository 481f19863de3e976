//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Minimum length of the session signing key, in bytes.
pub const MIN_SIGNING_KEY_LEN: usize = 32;

/// Longest allowed session lifetime: one year.
pub const MAX_SESSION_TTL_HOURS: u64 = 24 * 365;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// HS256 key for session cookies (raw bytes)
    pub session_signing_key: Vec<u8>,
    /// Lifetime of a session cookie, in hours
    pub session_ttl_hours: u64,
    /// Optional GeoJSON file replacing the built-in locations
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            session_signing_key: b"test_session_key_32_bytes_min!!!".to_vec(),
            session_ttl_hours: 24,
            catalog_path: None,
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let session_signing_key = env::var("SESSION_SIGNING_KEY")
            .map(|v| v.trim().to_string())
            .map_err(|_| ConfigError::Missing("SESSION_SIGNING_KEY"))?
            .into_bytes();
        if session_signing_key.len() < MIN_SIGNING_KEY_LEN {
            return Err(ConfigError::Invalid {
                name: "SESSION_SIGNING_KEY",
                reason: format!("must be at least {MIN_SIGNING_KEY_LEN} bytes"),
            });
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_or("PORT", 8080)?,
            session_signing_key,
            session_ttl_hours: session_ttl_hours(parse_or("SESSION_TTL_HOURS", 24)?)?,
            catalog_path: env::var("CATALOG_PATH").ok().map(PathBuf::from),
        })
    }
}

fn session_ttl_hours(hours: u64) -> Result<u64, ConfigError> {
    if (1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(ConfigError::Invalid {
            name: "SESSION_TTL_HOURS",
            reason: format!("must be between 1 and {MAX_SESSION_TTL_HOURS}"),
        })
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("cannot parse {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid environment variable {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
