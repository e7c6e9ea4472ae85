//! Workflow error taxonomy shared by every use case.
//!
//! # Responsibility
//! - Tag each failure with an explicit `ErrorKind` for boundary dispatch.
//! - Keep caller-facing messages separate from internal diagnostics.
//!
//! # Invariants
//! - `NotFound`, `Validation` and `Conflict` messages are safe to show
//!   verbatim to callers.
//! - `Unknown` never exposes its source through `public_message`.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const EVENT_NOT_FOUND: &str = "An event with this id does not exist.";
pub const ATTENDEE_NOT_FOUND: &str = "The attendee with this id was not found.";
pub const INVALID_NAME: &str = "The name is invalid.";
pub const INVALID_EMAIL: &str = "The e-mail is invalid.";
pub const ALREADY_REGISTERED: &str = "You can not register twice on the event.";
pub const EVENT_FULL: &str = "There is no room for this event.";
pub const ALREADY_CHECKED_IN: &str = "Attendee can not do check-in twice in the same event.";
pub const INVALID_TITLE: &str = "The title is invalid.";
pub const INVALID_DETAILS: &str = "The details are invalid.";
pub const INVALID_MAXIMUM_ATTENDEES: &str = "The maximum attendees is invalid.";
pub const SLUG_TAKEN: &str = "An event with this title already exists.";
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Failure category consumed by boundary collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Referenced entity is absent.
    NotFound,
    /// Malformed or policy-violating input.
    Validation,
    /// State-based rule violation.
    Conflict,
    /// Anything else; details stay internal.
    Unknown,
}

impl ErrorKind {
    /// Stable lowercase label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::Unknown => "unknown",
        }
    }
}

/// Error returned by registration, check-in and query workflows.
#[derive(Debug)]
pub enum WorkflowError {
    NotFound(String),
    Validation(String),
    Conflict(String),
    /// Store or bootstrap failure with no domain meaning.
    Unknown(RepoError),
}

impl WorkflowError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Message safe to hand to callers.
    pub fn public_message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::Validation(message) | Self::Conflict(message) => {
                message
            }
            Self::Unknown(_) => UNKNOWN_ERROR,
        }
    }
}

impl Display for WorkflowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(message) | Self::Validation(message) | Self::Conflict(message) => {
                write!(f, "{message}")
            }
            Self::Unknown(err) => write!(f, "unexpected store failure: {err}"),
        }
    }
}

impl Error for WorkflowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unknown(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for WorkflowError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::EventNotFound(_) => Self::not_found(EVENT_NOT_FOUND),
            RepoError::AttendeeNotFound(_) => Self::not_found(ATTENDEE_NOT_FOUND),
            RepoError::AttendeeAlreadyRegistered(_) => Self::conflict(ALREADY_REGISTERED),
            RepoError::AttendeeAlreadyCheckedIn(_) => Self::conflict(ALREADY_CHECKED_IN),
            RepoError::EventCapacityReached(_) => Self::validation(EVENT_FULL),
            RepoError::EventSlugTaken(_) => Self::conflict(SLUG_TAKEN),
            other => Self::Unknown(other),
        }
    }
}
