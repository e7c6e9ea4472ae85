//! Event registration use case.

use crate::error::WorkflowResult;
use crate::model::event::{Event, EventId};
use crate::repo::EventRepository;
use crate::service::log_failure;
use crate::validation::validate_new_event;
use log::info;

/// Input for creating an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEventRequest {
    pub title: String,
    pub details: String,
    pub maximum_attendees: u32,
}

/// Creates events with a derived, unique slug.
pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists a new event.
    ///
    /// # Errors
    /// - `Validation` for a blank title/details or zero capacity.
    /// - `Conflict` when another event already owns the derived slug.
    pub fn register_event(&self, request: &RegisterEventRequest) -> WorkflowResult<EventId> {
        let result = self.register_event_inner(request);
        match &result {
            Ok(event_id) => info!(
                "event=event_register module=service status=ok event_id={event_id} maximum_attendees={}",
                request.maximum_attendees
            ),
            Err(err) => log_failure("event_register", err),
        }
        result
    }

    fn register_event_inner(&self, request: &RegisterEventRequest) -> WorkflowResult<EventId> {
        let title = request.title.trim();
        let details = request.details.trim();
        validate_new_event(title, details, request.maximum_attendees)?;

        let event = Event::new(title, details, request.maximum_attendees);
        Ok(self.repo.create_event(&event)?)
    }
}
