//! Read-only event and attendee queries.

use crate::error::WorkflowResult;
use crate::model::attendee::AttendeeRecord;
use crate::model::event::{EventDetails, EventId};
use crate::repo::{AttendeeRepository, EventRepository};
use crate::service::log_failure;
use crate::validation::ensure_event_exists;
use log::debug;

/// Query facade over the event and attendee repositories.
pub struct QueryService<S> {
    store: S,
}

impl<S> QueryService<S>
where
    S: EventRepository + AttendeeRepository,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the event with its attendee count computed at call time.
    pub fn get_event(&self, event_id: EventId) -> WorkflowResult<EventDetails> {
        let result = ensure_event_exists(&self.store, event_id).and_then(|event| {
            let attendees_amount = self.store.count_attendees(event_id)?;
            Ok(EventDetails {
                event,
                attendees_amount,
            })
        });
        match &result {
            Ok(details) => debug!(
                "event=event_get module=service status=ok event_id={event_id} attendees_amount={}",
                details.attendees_amount
            ),
            Err(err) => log_failure("event_get", err),
        }
        result
    }

    /// Lists every attendee of the event in registration order.
    pub fn list_attendees(&self, event_id: EventId) -> WorkflowResult<Vec<AttendeeRecord>> {
        let result = ensure_event_exists(&self.store, event_id)
            .and_then(|_| Ok(self.store.list_attendees(event_id)?));
        match &result {
            Ok(attendees) => debug!(
                "event=attendees_list module=service status=ok event_id={event_id} count={}",
                attendees.len()
            ),
            Err(err) => log_failure("attendees_list", err),
        }
        result
    }
}
