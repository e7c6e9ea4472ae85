//! Request and response bodies exchanged with callers.
//!
//! Field names are camelCase on the wire.

use passin_core::{AttendeeRecord, EventDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEventJson {
    pub title: String,
    pub details: String,
    pub maximum_attendees: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRegisterEventJson {
    pub name: String,
    pub email: String,
}

/// Id of a freshly created event, attendee or check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRegisteredJson {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEventJson {
    pub id: String,
    pub title: String,
    pub details: String,
    pub slug: String,
    pub maximum_attendees: u32,
    pub attendees_amount: u32,
}

impl From<EventDetails> for ResponseEventJson {
    fn from(value: EventDetails) -> Self {
        let EventDetails {
            event,
            attendees_amount,
        } = value;
        Self {
            id: event.id.to_string(),
            title: event.title,
            details: event.details,
            slug: event.slug,
            maximum_attendees: event.maximum_attendees,
            attendees_amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAttendeeJson {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds; `null` until checked in.
    pub checked_in_at: Option<i64>,
}

impl From<AttendeeRecord> for ResponseAttendeeJson {
    fn from(value: AttendeeRecord) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            email: value.email,
            created_at: value.created_at,
            checked_in_at: value.checked_in_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAllAttendeesJson {
    pub attendees: Vec<ResponseAttendeeJson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseErrorJson {
    pub message: String,
}
