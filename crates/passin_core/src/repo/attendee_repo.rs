//! Attendee repository contract and SQLite implementation.
//!
//! # Invariants
//! - Listing is in insertion order (`rowid ASC`).
//! - Email comparison is exact; callers normalize before querying.

use crate::model::attendee::{Attendee, AttendeeId, AttendeeRecord};
use crate::model::event::EventId;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::sqlite_store::{constraint_violation, parse_uuid, ConstraintViolation, SqliteStore};
use rusqlite::params;

/// Store access for attendee registrations.
pub trait AttendeeRepository {
    /// Inserts one attendee and returns its id.
    ///
    /// Storage constraints are reported as `AttendeeAlreadyRegistered`,
    /// `EventCapacityReached` or `EventNotFound`.
    fn create_attendee(&self, attendee: &Attendee) -> RepoResult<AttendeeId>;
    /// Returns whether an attendee with `id` exists.
    fn attendee_exists(&self, id: AttendeeId) -> RepoResult<bool>;
    /// Returns whether `email` is already registered for `event_id`.
    fn email_registered(&self, event_id: EventId, email: &str) -> RepoResult<bool>;
    /// Counts attendees currently registered for `event_id`.
    fn count_attendees(&self, event_id: EventId) -> RepoResult<u32>;
    /// Lists attendees of `event_id` with their check-in timestamp.
    fn list_attendees(&self, event_id: EventId) -> RepoResult<Vec<AttendeeRecord>>;
}

impl<T: AttendeeRepository + ?Sized> AttendeeRepository for &T {
    fn create_attendee(&self, attendee: &Attendee) -> RepoResult<AttendeeId> {
        (**self).create_attendee(attendee)
    }

    fn attendee_exists(&self, id: AttendeeId) -> RepoResult<bool> {
        (**self).attendee_exists(id)
    }

    fn email_registered(&self, event_id: EventId, email: &str) -> RepoResult<bool> {
        (**self).email_registered(event_id, email)
    }

    fn count_attendees(&self, event_id: EventId) -> RepoResult<u32> {
        (**self).count_attendees(event_id)
    }

    fn list_attendees(&self, event_id: EventId) -> RepoResult<Vec<AttendeeRecord>> {
        (**self).list_attendees(event_id)
    }
}

impl AttendeeRepository for SqliteStore<'_> {
    fn create_attendee(&self, attendee: &Attendee) -> RepoResult<AttendeeId> {
        let inserted = self.conn.execute(
            "INSERT INTO attendees (
                id,
                name,
                email,
                event_id,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                attendee.id.to_string(),
                attendee.name.as_str(),
                attendee.email.as_str(),
                attendee.event_id.to_string(),
                attendee.created_at,
            ],
        );

        match inserted {
            Ok(_) => Ok(attendee.id),
            Err(err) => Err(match constraint_violation(&err) {
                Some(ConstraintViolation::Unique) => {
                    RepoError::AttendeeAlreadyRegistered(attendee.event_id)
                }
                Some(ConstraintViolation::Capacity) => {
                    RepoError::EventCapacityReached(attendee.event_id)
                }
                Some(ConstraintViolation::ForeignKey) => {
                    RepoError::EventNotFound(attendee.event_id)
                }
                None => err.into(),
            }),
        }
    }

    fn attendee_exists(&self, id: AttendeeId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM attendees WHERE id = ?1);",
            [id.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn email_registered(&self, event_id: EventId, email: &str) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM attendees
                WHERE event_id = ?1
                  AND email = ?2
            );",
            params![event_id.to_string(), email],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn count_attendees(&self, event_id: EventId) -> RepoResult<u32> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM attendees WHERE event_id = ?1;",
            [event_id.to_string()],
            |row| row.get(0),
        )?;
        u32::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("attendee count `{count}` out of range")))
    }

    fn list_attendees(&self, event_id: EventId) -> RepoResult<Vec<AttendeeRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                a.id,
                a.name,
                a.email,
                a.created_at,
                c.created_at AS checked_in_at
             FROM attendees a
             LEFT JOIN check_ins c ON c.attendee_id = a.id
             WHERE a.event_id = ?1
             ORDER BY a.rowid ASC;",
        )?;

        let mut rows = stmt.query([event_id.to_string()])?;
        let mut attendees = Vec::new();
        while let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            attendees.push(AttendeeRecord {
                id: parse_uuid(&id_text, "attendees.id")?,
                name: row.get("name")?,
                email: row.get("email")?,
                created_at: row.get("created_at")?,
                checked_in_at: row.get("checked_in_at")?,
            });
        }

        Ok(attendees)
    }
}
