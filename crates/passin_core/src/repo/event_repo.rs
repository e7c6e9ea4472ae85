//! Event repository contract and SQLite implementation.

use crate::model::event::{Event, EventId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::sqlite_store::{constraint_violation, parse_uuid, ConstraintViolation, SqliteStore};
use rusqlite::{params, OptionalExtension, Row};

/// Store access for events.
pub trait EventRepository {
    /// Inserts one event and returns its id.
    ///
    /// Fails with `EventSlugTaken` when the slug is already in use.
    fn create_event(&self, event: &Event) -> RepoResult<EventId>;
    /// Finds one event by id.
    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>>;
}

impl<T: EventRepository + ?Sized> EventRepository for &T {
    fn create_event(&self, event: &Event) -> RepoResult<EventId> {
        (**self).create_event(event)
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        (**self).get_event(id)
    }
}

impl EventRepository for SqliteStore<'_> {
    fn create_event(&self, event: &Event) -> RepoResult<EventId> {
        let inserted = self.conn.execute(
            "INSERT INTO events (
                id,
                title,
                details,
                slug,
                maximum_attendees
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                event.id.to_string(),
                event.title.as_str(),
                event.details.as_str(),
                event.slug.as_str(),
                i64::from(event.maximum_attendees),
            ],
        );

        match inserted {
            Ok(_) => Ok(event.id),
            Err(err) if constraint_violation(&err) == Some(ConstraintViolation::Unique) => {
                Err(RepoError::EventSlugTaken(event.slug.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, title, details, slug, maximum_attendees
                 FROM events
                 WHERE id = ?1;",
                [id.to_string()],
                read_event_row,
            )
            .optional()?;

        row.map(EventRow::into_event).transpose()
    }
}

struct EventRow {
    id: String,
    title: String,
    details: String,
    slug: String,
    maximum_attendees: i64,
}

impl EventRow {
    fn into_event(self) -> RepoResult<Event> {
        let maximum_attendees = u32::try_from(self.maximum_attendees).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid maximum_attendees `{}` in events.maximum_attendees",
                self.maximum_attendees
            ))
        })?;

        Ok(Event {
            id: parse_uuid(&self.id, "events.id")?,
            title: self.title,
            details: self.details,
            slug: self.slug,
            maximum_attendees,
        })
    }
}

fn read_event_row(row: &Row<'_>) -> rusqlite::Result<EventRow> {
    Ok(EventRow {
        id: row.get("id")?,
        title: row.get("title")?,
        details: row.get("details")?,
        slug: row.get("slug")?,
        maximum_attendees: row.get("maximum_attendees")?,
    })
}
