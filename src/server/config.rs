use log::LevelFilter;
use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;
/// Upper bound keeping `time::Duration::days` clear of overflow.
const MAX_SESSION_INACTIVITY_DAYS: i64 = 36_500;
const DEFAULT_SQL_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub struct Config {
    pub database_url: String,
    /// Level SQL statements are logged at; `off` disables statement logging.
    pub sql_log_level: LevelFilter,

    pub bind_address: String,
    pub session_inactivity_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            sql_log_level: parse_sql_log_level(std::env::var("SQL_LOG_LEVEL").ok())?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_inactivity_days: parse_session_inactivity_days(
                std::env::var("SESSION_INACTIVITY_DAYS").ok(),
            )?,
        })
    }
}

/// Parses the session inactivity window, falling back to the default when unset.
fn parse_session_inactivity_days(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_SESSION_INACTIVITY_DAYS);
    };

    match value.trim().parse::<i64>() {
        Ok(days) if (1..=MAX_SESSION_INACTIVITY_DAYS).contains(&days) => Ok(days),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "SESSION_INACTIVITY_DAYS".to_string(),
            value,
        }),
    }
}

/// Parses the SQL statement log level, falling back to `debug` when unset.
fn parse_sql_log_level(value: Option<String>) -> Result<LevelFilter, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_SQL_LOG_LEVEL);
    };

    LevelFilter::from_str(value.trim()).map_err(|_| ConfigError::InvalidEnvVar {
        name: "SQL_LOG_LEVEL".to_string(),
        value,
    })
}
