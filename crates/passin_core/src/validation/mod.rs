//! Validation rules for registration, check-in and event creation.
//!
//! # Responsibility
//! - Expose one check per rule, each failing fast with a specific
//!   `WorkflowError` kind.
//! - Compose the checks in the order workflows must run them.
//!
//! # Invariants
//! - Registration order is: event exists, name, email, duplicate, capacity.
//!   Later rules assume earlier ones passed, so a duplicate email at a full
//!   event reports `Conflict`, not capacity.
//! - Check-in order is: attendee exists, not already checked in.
//! - Checks only read the store.

pub mod email;

use crate::error::{
    WorkflowError, WorkflowResult, ALREADY_CHECKED_IN, ALREADY_REGISTERED, ATTENDEE_NOT_FOUND,
    EVENT_FULL, EVENT_NOT_FOUND, INVALID_DETAILS, INVALID_EMAIL, INVALID_MAXIMUM_ATTENDEES,
    INVALID_NAME, INVALID_TITLE,
};
use crate::model::attendee::AttendeeId;
use crate::model::event::{Event, EventId};
use crate::repo::{AttendeeRepository, CheckInRepository, EventRepository};

pub use email::EmailPolicy;

/// Loads the event or fails with `NotFound`.
pub fn ensure_event_exists<R: EventRepository>(
    repo: &R,
    event_id: EventId,
) -> WorkflowResult<Event> {
    repo.get_event(event_id)?
        .ok_or_else(|| WorkflowError::not_found(EVENT_NOT_FOUND))
}

/// Fails with `Validation` when `name` is empty or whitespace-only.
pub fn ensure_name_present(name: &str) -> WorkflowResult<()> {
    ensure_not_blank(name, INVALID_NAME)
}

/// Fails with `Validation` when `email` does not satisfy `policy`.
pub fn ensure_email_valid(policy: &EmailPolicy, email: &str) -> WorkflowResult<()> {
    if policy.is_valid(email) {
        Ok(())
    } else {
        Err(WorkflowError::validation(INVALID_EMAIL))
    }
}

/// Fails with `Conflict` when `email` is already registered for `event_id`.
pub fn ensure_not_registered<R: AttendeeRepository>(
    repo: &R,
    event_id: EventId,
    email: &str,
) -> WorkflowResult<()> {
    if repo.email_registered(event_id, email)? {
        return Err(WorkflowError::conflict(ALREADY_REGISTERED));
    }
    Ok(())
}

/// Fails with `Validation` when `event` has no free seat left.
pub fn ensure_capacity_available<R: AttendeeRepository>(
    repo: &R,
    event: &Event,
) -> WorkflowResult<()> {
    if repo.count_attendees(event.id)? >= event.maximum_attendees {
        return Err(WorkflowError::validation(EVENT_FULL));
    }
    Ok(())
}

/// Runs the registration rules in order and returns the target event.
///
/// `name` and `email` must already be trimmed.
pub fn validate_registration<R>(
    repo: &R,
    policy: &EmailPolicy,
    event_id: EventId,
    name: &str,
    email: &str,
) -> WorkflowResult<Event>
where
    R: EventRepository + AttendeeRepository,
{
    let event = ensure_event_exists(repo, event_id)?;
    ensure_name_present(name)?;
    ensure_email_valid(policy, email)?;
    ensure_not_registered(repo, event_id, email)?;
    ensure_capacity_available(repo, &event)?;
    Ok(event)
}

/// Fails with `NotFound` when no attendee has `attendee_id`.
pub fn ensure_attendee_exists<R: AttendeeRepository>(
    repo: &R,
    attendee_id: AttendeeId,
) -> WorkflowResult<()> {
    if repo.attendee_exists(attendee_id)? {
        Ok(())
    } else {
        Err(WorkflowError::not_found(ATTENDEE_NOT_FOUND))
    }
}

/// Fails with `Conflict` when the attendee already has a check-in.
pub fn ensure_not_checked_in<R: CheckInRepository>(
    repo: &R,
    attendee_id: AttendeeId,
) -> WorkflowResult<()> {
    if repo.has_check_in(attendee_id)? {
        return Err(WorkflowError::conflict(ALREADY_CHECKED_IN));
    }
    Ok(())
}

/// Runs the check-in rules in order.
pub fn validate_check_in<R>(repo: &R, attendee_id: AttendeeId) -> WorkflowResult<()>
where
    R: AttendeeRepository + CheckInRepository,
{
    ensure_attendee_exists(repo, attendee_id)?;
    ensure_not_checked_in(repo, attendee_id)
}

/// Runs the event-creation rules in order.
///
/// `title` and `details` must already be trimmed.
pub fn validate_new_event(
    title: &str,
    details: &str,
    maximum_attendees: u32,
) -> WorkflowResult<()> {
    ensure_not_blank(title, INVALID_TITLE)?;
    ensure_not_blank(details, INVALID_DETAILS)?;
    if maximum_attendees == 0 {
        return Err(WorkflowError::validation(INVALID_MAXIMUM_ATTENDEES));
    }
    Ok(())
}

fn ensure_not_blank(value: &str, message: &'static str) -> WorkflowResult<()> {
    if value.trim().is_empty() {
        return Err(WorkflowError::validation(message));
    }
    Ok(())
}
