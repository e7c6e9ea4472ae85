//! SQLite storage bootstrap for the registration store.
//!
//! # Responsibility
//! - Open and configure SQLite connections for PassIn core.
//! - Apply the embedded schema in deterministic order.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Workflows must not touch `events`, `attendees` or `check_ins` before
//!   migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failures while opening or migrating the registration store.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a build with a newer schema.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// A migration script failed; the batch was rolled back.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// `PRAGMA foreign_keys` did not stick, so dangling attendee and
    /// check-in references would go unnoticed.
    ForeignKeysDisabled,
}

impl DbError {
    /// Stable `error_code` value for `key=value` log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "db_sqlite_failed",
            Self::UnsupportedSchemaVersion { .. } => "db_schema_too_new",
            Self::Migration { .. } => "db_migration_failed",
            Self::ForeignKeysDisabled => "db_foreign_keys_disabled",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "registration store schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Migration { version, source } => {
                write!(f, "migration {version} failed: {source}")
            }
            Self::ForeignKeysDisabled => {
                write!(f, "foreign key enforcement could not be enabled")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) | Self::Migration { source: err, .. } => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::ForeignKeysDisabled => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
