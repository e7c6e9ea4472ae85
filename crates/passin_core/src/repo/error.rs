//! Repository error taxonomy.

use crate::db::DbError;
use crate::model::attendee::AttendeeId;
use crate::model::event::EventId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from store reads and writes.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Referenced event does not exist.
    EventNotFound(EventId),
    /// Referenced attendee does not exist.
    AttendeeNotFound(AttendeeId),
    /// `(event_id, email)` uniqueness violated on insert.
    AttendeeAlreadyRegistered(EventId),
    /// `check_ins.attendee_id` uniqueness violated on insert.
    AttendeeAlreadyCheckedIn(AttendeeId),
    /// Capacity trigger aborted an attendee insert.
    EventCapacityReached(EventId),
    /// `events.slug` uniqueness violated on insert.
    EventSlugTaken(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Persisted data cannot be converted to a valid record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::AttendeeNotFound(id) => write!(f, "attendee not found: {id}"),
            Self::AttendeeAlreadyRegistered(event_id) => {
                write!(f, "email already registered for event {event_id}")
            }
            Self::AttendeeAlreadyCheckedIn(id) => write!(f, "attendee already checked in: {id}"),
            Self::EventCapacityReached(id) => write!(f, "event capacity reached: {id}"),
            Self::EventSlugTaken(slug) => write!(f, "event slug already taken: `{slug}`"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "store requires table `{table}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
