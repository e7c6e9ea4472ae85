//! Core registration and check-in logic for PassIn.
//! This crate is the single source of truth for registration invariants.

pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use error::{ErrorKind, WorkflowError, WorkflowResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::attendee::{Attendee, AttendeeId, AttendeeRecord, CheckIn, CheckInId};
pub use model::event::{slugify, Event, EventDetails, EventId};
pub use repo::{
    AttendeeRepository, CheckInRepository, EventRepository, RepoError, RepoResult, SqliteStore,
};
pub use service::checkin_service::CheckInService;
pub use service::event_service::{EventService, RegisterEventRequest};
pub use service::query_service::QueryService;
pub use service::registration_service::{RegisterAttendeeRequest, RegistrationService};
pub use validation::EmailPolicy;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
