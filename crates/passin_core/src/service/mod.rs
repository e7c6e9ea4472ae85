//! Workflow services.
//!
//! # Responsibility
//! - Orchestrate validation followed by a single store read or write.
//! - Keep boundary layers decoupled from storage details.
//!
//! # Invariants
//! - Services receive their store by injection; none opens a connection.
//! - Log lines carry ids and error kinds only, never names or emails.

pub mod checkin_service;
pub mod event_service;
pub mod query_service;
pub mod registration_service;

use crate::error::{ErrorKind, WorkflowError};
use log::{error, warn};

fn log_failure(event: &str, err: &WorkflowError) {
    match err.kind() {
        ErrorKind::Unknown => error!(
            "event={event} module=service status=error error_kind={} error={err}",
            err.kind().as_str()
        ),
        kind => warn!(
            "event={event} module=service status=rejected error_kind={}",
            kind.as_str()
        ),
    }
}
