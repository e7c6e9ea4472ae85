//! Check-in repository contract and SQLite implementation.

use crate::model::attendee::{AttendeeId, CheckIn, CheckInId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::sqlite_store::{constraint_violation, ConstraintViolation, SqliteStore};
use rusqlite::params;

/// Store access for check-ins.
pub trait CheckInRepository {
    /// Inserts one check-in and returns its id.
    ///
    /// A second check-in for the same attendee fails with
    /// `AttendeeAlreadyCheckedIn`; an unknown attendee with
    /// `AttendeeNotFound`.
    fn create_check_in(&self, check_in: &CheckIn) -> RepoResult<CheckInId>;
    /// Returns whether `attendee_id` already has a check-in.
    fn has_check_in(&self, attendee_id: AttendeeId) -> RepoResult<bool>;
}

impl<T: CheckInRepository + ?Sized> CheckInRepository for &T {
    fn create_check_in(&self, check_in: &CheckIn) -> RepoResult<CheckInId> {
        (**self).create_check_in(check_in)
    }

    fn has_check_in(&self, attendee_id: AttendeeId) -> RepoResult<bool> {
        (**self).has_check_in(attendee_id)
    }
}

impl CheckInRepository for SqliteStore<'_> {
    fn create_check_in(&self, check_in: &CheckIn) -> RepoResult<CheckInId> {
        let inserted = self.conn.execute(
            "INSERT INTO check_ins (id, attendee_id, created_at) VALUES (?1, ?2, ?3);",
            params![
                check_in.id.to_string(),
                check_in.attendee_id.to_string(),
                check_in.created_at,
            ],
        );

        match inserted {
            Ok(_) => Ok(check_in.id),
            Err(err) => Err(match constraint_violation(&err) {
                Some(ConstraintViolation::Unique) => {
                    RepoError::AttendeeAlreadyCheckedIn(check_in.attendee_id)
                }
                Some(ConstraintViolation::ForeignKey) => {
                    RepoError::AttendeeNotFound(check_in.attendee_id)
                }
                _ => err.into(),
            }),
        }
    }

    fn has_check_in(&self, attendee_id: AttendeeId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM check_ins WHERE attendee_id = ?1);",
            [attendee_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}
