//! Attendee registration workflow.
//!
//! # Invariants
//! - Rules run in the order defined by `validation::validate_registration`.
//! - Exactly one insert happens, and only after every rule passed.
//! - Storage constraint violations raised by the insert are reported with
//!   the same kinds as the matching pre-checks.

use crate::error::WorkflowResult;
use crate::model::attendee::{Attendee, AttendeeId};
use crate::model::event::EventId;
use crate::repo::{AttendeeRepository, EventRepository};
use crate::service::log_failure;
use crate::validation::{validate_registration, EmailPolicy};
use log::info;

/// Input for registering an attendee on an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAttendeeRequest {
    pub name: String,
    pub email: String,
}

/// Registers attendees on events.
pub struct RegistrationService<S> {
    store: S,
    email_policy: EmailPolicy,
}

impl<S> RegistrationService<S>
where
    S: EventRepository + AttendeeRepository,
{
    /// Creates a service using the default email policy.
    pub fn new(store: S) -> Self {
        Self::with_email_policy(store, EmailPolicy::default())
    }

    pub fn with_email_policy(store: S, email_policy: EmailPolicy) -> Self {
        Self {
            store,
            email_policy,
        }
    }

    /// Registers `request` on `event_id` and returns the new attendee id.
    ///
    /// Name and email are trimmed before validation and storage.
    ///
    /// # Errors
    /// - `NotFound` when the event does not exist.
    /// - `Validation` for a blank name, an invalid email or a full event.
    /// - `Conflict` when the email is already registered on the event.
    pub fn register_attendee(
        &self,
        event_id: EventId,
        request: &RegisterAttendeeRequest,
    ) -> WorkflowResult<AttendeeId> {
        let result = self.register_attendee_inner(event_id, request);
        match &result {
            Ok(attendee_id) => info!(
                "event=attendee_register module=service status=ok event_id={event_id} attendee_id={attendee_id}"
            ),
            Err(err) => log_failure("attendee_register", err),
        }
        result
    }

    fn register_attendee_inner(
        &self,
        event_id: EventId,
        request: &RegisterAttendeeRequest,
    ) -> WorkflowResult<AttendeeId> {
        let name = request.name.trim();
        let email = request.email.trim();
        validate_registration(&self.store, &self.email_policy, event_id, name, email)?;

        let attendee = Attendee::new(event_id, name, email);
        Ok(self.store.create_attendee(&attendee)?)
    }
}
