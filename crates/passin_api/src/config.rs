//! Runtime configuration for the boundary.
//!
//! # Responsibility
//! - Resolve store path, logging and email policy from the environment.
//!
//! # Invariants
//! - Missing or blank variables fall back to defaults; resolution never
//!   fails.

use passin_core::{default_log_level, init_logging, EmailPolicy, LoggingError};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "PASSIN_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "PASSIN_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PASSIN_LOG_DIR";
pub const ENV_EMAIL_REQUIRE_DOT: &str = "PASSIN_EMAIL_REQUIRE_DOT";

const DEFAULT_DB_FILE_NAME: &str = "passin.sqlite3";

/// Resolved boundary configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Logging stays disabled when unset.
    pub log_dir: Option<String>,
    pub email_policy: EmailPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            email_policy: EmailPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Reads `PASSIN_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        let require_domain_dot = read(ENV_EMAIL_REQUIRE_DOT)
            .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            db_path: read(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR),
            email_policy: EmailPolicy { require_domain_dot },
        }
    }

    /// Starts file logging when `log_dir` is configured.
    pub fn init_logging(&self) -> Result<(), LoggingError> {
        match self.log_dir.as_deref() {
            Some(log_dir) => init_logging(&self.log_level, log_dir),
            None => Ok(()),
        }
    }
}
