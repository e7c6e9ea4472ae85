//! Attendee check-in workflow.
//!
//! # Invariants
//! - At most one check-in exists per attendee; the unique index on
//!   `check_ins.attendee_id` backs the pre-check.

use crate::error::WorkflowResult;
use crate::model::attendee::{AttendeeId, CheckIn, CheckInId};
use crate::repo::{AttendeeRepository, CheckInRepository};
use crate::service::log_failure;
use crate::validation::validate_check_in;
use log::info;

/// Records attendee arrivals.
pub struct CheckInService<S> {
    store: S,
}

impl<S> CheckInService<S>
where
    S: AttendeeRepository + CheckInRepository,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Checks `attendee_id` in and returns the new check-in id.
    ///
    /// # Errors
    /// - `NotFound` when the attendee does not exist.
    /// - `Conflict` when the attendee already checked in.
    pub fn check_in(&self, attendee_id: AttendeeId) -> WorkflowResult<CheckInId> {
        let result = validate_check_in(&self.store, attendee_id).and_then(|()| {
            let check_in = CheckIn::new(attendee_id);
            Ok(self.store.create_check_in(&check_in)?)
        });
        match &result {
            Ok(check_in_id) => info!(
                "event=attendee_check_in module=service status=ok attendee_id={attendee_id} check_in_id={check_in_id}"
            ),
            Err(err) => log_failure("attendee_check_in", err),
        }
        result
    }
}
