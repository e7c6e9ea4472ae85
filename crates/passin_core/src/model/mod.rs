//! Domain model for events, attendees and check-ins.
//!
//! # Responsibility
//! - Define the records persisted by the registration store.
//! - Generate stable identities and creation timestamps.
//!
//! # Invariants
//! - Every record is identified by a UUID v4 that is never reused.
//! - Records are append-only: none of them is mutated after creation.

pub mod attendee;
pub mod event;

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time in Unix epoch milliseconds.
///
/// Falls back to `0` if the system clock reports a time before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
}
