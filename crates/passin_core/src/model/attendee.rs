//! Attendee and check-in domain model.
//!
//! # Invariants
//! - `(event_id, email)` is unique across attendees.
//! - An attendee has at most one check-in.

use super::event::EventId;
use super::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an attendee registration.
pub type AttendeeId = Uuid;

/// Stable identifier of a check-in record.
pub type CheckInId = Uuid;

/// A person registered for exactly one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: AttendeeId,
    pub name: String,
    pub email: String,
    pub event_id: EventId,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Attendee {
    /// Creates a registration stamped with the current time.
    pub fn new(event_id: EventId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            event_id,
            created_at: now_epoch_ms(),
        }
    }
}

/// Record that an attendee physically arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: CheckInId,
    pub attendee_id: AttendeeId,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl CheckIn {
    pub fn new(attendee_id: AttendeeId) -> Self {
        Self {
            id: Uuid::new_v4(),
            attendee_id,
            created_at: now_epoch_ms(),
        }
    }
}

/// Read model for the attendee list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    pub id: AttendeeId,
    pub name: String,
    pub email: String,
    pub created_at: i64,
    /// `None` until the attendee checks in.
    pub checked_in_at: Option<i64>,
}
