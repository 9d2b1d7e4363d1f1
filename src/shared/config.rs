//! Environment-driven configuration
//!
//! Values are read from the process environment after loading an optional
//! `.env` file:
//!
//! - `CLINICFLOW_ENV`: `development` (default) or `production`
//! - `CLINICFLOW_LOG`: log level for this crate (default `info`)

use std::fmt;
use std::str::FromStr;

use log::LevelFilter;

use crate::shared::errors::{AppError, AppResult};

pub const ENV_VAR: &str = "CLINICFLOW_ENV";
pub const LOG_VAR: &str = "CLINICFLOW_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(AppError::ValidationError(format!(
                "Invalid {} value: {}",
                ENV_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(ENV_VAR) {
            Some(raw) => raw.parse()?,
            None => Environment::default(),
        };

        let log_level = match lookup(LOG_VAR) {
            Some(raw) => raw.trim().parse::<LevelFilter>().map_err(|_| {
                AppError::ValidationError(format!("Invalid {} value: {}", LOG_VAR, raw))
            })?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            environment,
            log_level,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
