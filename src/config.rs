use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
/// Access tokens live 15 minutes.
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 900;
/// Refresh tokens live 7 days.
const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 604_800;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub jwt_access_ttl_secs: i64,
    pub jwt_refresh_ttl_secs: i64,

    pub upload_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_access_ttl_secs: env_i64("JWT_ACCESS_TTL_SECS", DEFAULT_ACCESS_TOKEN_TTL_SECS)?,
            jwt_refresh_ttl_secs: env_i64("JWT_REFRESH_TTL_SECS", DEFAULT_REFRESH_TOKEN_TTL_SECS)?,
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
        })
    }
}

/// Reads an optional integer variable, falling back to the default when unset.
fn env_i64(name: &str, default: i64) -> Result<i64, AppError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }
            .into()
        }),
        Err(_) => Ok(default),
    }
}
