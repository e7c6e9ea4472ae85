//! Use-case API for routing collaborators.
//!
//! # Responsibility
//! - Expose one method per operation with string identifiers in and
//!   status + JSON envelopes out.
//! - Translate `ErrorKind` into transport status codes.
//!
//! # Invariants
//! - Methods never panic and never return `Err`; every failure becomes an
//!   envelope with a `{"message": ...}` body.
//! - Unknown failures answer 500 with a generic message; details only go to
//!   the log.

use crate::config::ApiConfig;
use crate::dto::{
    RequestEventJson, RequestRegisterEventJson, ResponseAllAttendeesJson, ResponseAttendeeJson,
    ResponseErrorJson, ResponseEventJson, ResponseRegisteredJson,
};
use log::error;
use passin_core::db::{open_db, open_db_in_memory, DbError};
use passin_core::error::{ATTENDEE_NOT_FOUND, EVENT_NOT_FOUND, UNKNOWN_ERROR};
use passin_core::{
    CheckInService, EmailPolicy, ErrorKind, EventService, QueryService, RegisterAttendeeRequest,
    RegisterEventRequest, RegistrationService, SqliteStore, WorkflowError, WorkflowResult,
};
use rusqlite::Connection;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;

/// Transport-neutral response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn with_body(status: u16, body: &impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(err) => {
                error!("event=response_encode module=api status=error error={err}");
                Self::unknown()
            }
        }
    }

    fn failure(err: &WorkflowError) -> Self {
        let body = ResponseErrorJson {
            message: err.public_message().to_string(),
        };
        Self::with_body(status_for(err.kind()), &body)
    }

    fn unknown() -> Self {
        Self {
            status: status_for(ErrorKind::Unknown),
            body: json!({ "message": UNKNOWN_ERROR }),
        }
    }

    /// Returns whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Maps an error kind to its transport status code.
pub fn status_for(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 400,
        ErrorKind::NotFound => 404,
        ErrorKind::Conflict => 409,
        ErrorKind::Unknown => 500,
    }
}

/// Entry point owning one store connection.
pub struct PassInApi {
    conn: Connection,
    email_policy: EmailPolicy,
}

impl PassInApi {
    /// Opens (and migrates) the database named by `config`.
    pub fn open(config: &ApiConfig) -> Result<Self, DbError> {
        Ok(Self {
            conn: open_db(&config.db_path)?,
            email_policy: config.email_policy,
        })
    }

    /// Opens an empty in-memory store.
    pub fn open_in_memory(email_policy: EmailPolicy) -> Result<Self, DbError> {
        Ok(Self {
            conn: open_db_in_memory()?,
            email_policy,
        })
    }

    /// Creates an event. 201 + `{id}` on success.
    pub fn register_event(&self, request: &RequestEventJson) -> ApiResponse {
        let request = RegisterEventRequest {
            title: request.title.clone(),
            details: request.details.clone(),
            maximum_attendees: request.maximum_attendees,
        };
        self.respond("event_register", STATUS_CREATED, |store| {
            let event_id = EventService::new(store).register_event(&request)?;
            Ok(ResponseRegisteredJson {
                id: event_id.to_string(),
            })
        })
    }

    /// Registers an attendee on `event_id`. 201 + `{id}` on success.
    pub fn register_attendee(
        &self,
        event_id: &str,
        request: &RequestRegisterEventJson,
    ) -> ApiResponse {
        let request = RegisterAttendeeRequest {
            name: request.name.clone(),
            email: request.email.clone(),
        };
        self.respond("attendee_register", STATUS_CREATED, |store| {
            let event_id = parse_id(event_id, EVENT_NOT_FOUND)?;
            let service = RegistrationService::with_email_policy(store, self.email_policy);
            let attendee_id = service.register_attendee(event_id, &request)?;
            Ok(ResponseRegisteredJson {
                id: attendee_id.to_string(),
            })
        })
    }

    /// Checks an attendee in. 201 + `{id}` of the check-in on success.
    pub fn check_in(&self, attendee_id: &str) -> ApiResponse {
        self.respond("attendee_check_in", STATUS_CREATED, |store| {
            let attendee_id = parse_id(attendee_id, ATTENDEE_NOT_FOUND)?;
            let check_in_id = CheckInService::new(store).check_in(attendee_id)?;
            Ok(ResponseRegisteredJson {
                id: check_in_id.to_string(),
            })
        })
    }

    /// Returns an event and its live attendee count. 200 on success.
    pub fn get_event(&self, event_id: &str) -> ApiResponse {
        self.respond("event_get", STATUS_OK, |store| {
            let event_id = parse_id(event_id, EVENT_NOT_FOUND)?;
            let details = QueryService::new(store).get_event(event_id)?;
            Ok(ResponseEventJson::from(details))
        })
    }

    /// Lists an event's attendees with check-in timestamps. 200 on success.
    pub fn list_attendees(&self, event_id: &str) -> ApiResponse {
        self.respond("attendees_list", STATUS_OK, |store| {
            let event_id = parse_id(event_id, EVENT_NOT_FOUND)?;
            let attendees = QueryService::new(store).list_attendees(event_id)?;
            Ok(ResponseAllAttendeesJson {
                attendees: attendees
                    .into_iter()
                    .map(ResponseAttendeeJson::from)
                    .collect(),
            })
        })
    }

    fn respond<T: Serialize>(
        &self,
        operation: &str,
        success_status: u16,
        f: impl FnOnce(SqliteStore<'_>) -> WorkflowResult<T>,
    ) -> ApiResponse {
        let result = SqliteStore::try_new(&self.conn)
            .map_err(WorkflowError::from)
            .and_then(f);
        match result {
            Ok(body) => ApiResponse::with_body(success_status, &body),
            Err(err) => {
                if err.kind() == ErrorKind::Unknown {
                    error!("event={operation} module=api status=error error={err}");
                }
                ApiResponse::failure(&err)
            }
        }
    }
}

/// Unparseable ids cannot name an existing entity.
fn parse_id(raw: &str, not_found_message: &str) -> WorkflowResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| WorkflowError::not_found(not_found_message))
}
