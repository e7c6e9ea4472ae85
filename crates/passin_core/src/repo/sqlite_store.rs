//! SQLite-backed store shared by all repository contracts.
//!
//! # Responsibility
//! - Hold a borrowed, migrated connection.
//! - Decode constraint violations raised by the schema.
//!
//! # Invariants
//! - `try_new` refuses connections that are not fully migrated.

use crate::db::migrations::latest_version;
use crate::repo::error::{RepoError, RepoResult};
use rusqlite::{ffi, Connection, ErrorCode};
use uuid::Uuid;

/// Message raised by the `trg_attendees_capacity` trigger.
pub(crate) const CAPACITY_TRIGGER_MESSAGE: &str = "event_capacity_reached";

const REQUIRED_TABLES: [&str; 3] = ["events", "attendees", "check_ins"];

/// SQLite implementation of the event, attendee and check-in repositories.
///
/// Cheap to construct; workflows may build one per call over a long-lived
/// connection.
pub struct SqliteStore<'conn> {
    pub(crate) conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Wraps a connection returned by `db::open_db*`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` is not the
    ///   latest migration.
    /// - `MissingRequiredTable` when a store table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_store_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

/// Constraint families the schema can raise on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintViolation {
    Unique,
    ForeignKey,
    Capacity,
}

/// Classifies a SQLite error as one of the schema's constraint violations.
pub(crate) fn constraint_violation(err: &rusqlite::Error) -> Option<ConstraintViolation> {
    let rusqlite::Error::SqliteFailure(failure, message) = err else {
        return None;
    };
    if failure.code != ErrorCode::ConstraintViolation {
        return None;
    }

    if message
        .as_deref()
        .is_some_and(|text| text.contains(CAPACITY_TRIGGER_MESSAGE))
    {
        return Some(ConstraintViolation::Capacity);
    }

    match failure.extended_code {
        ffi::SQLITE_CONSTRAINT_UNIQUE => Some(ConstraintViolation::Unique),
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(ConstraintViolation::ForeignKey),
        _ => None,
    }
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{value}` in {column}")))
}

fn ensure_store_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in REQUIRED_TABLES {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
