//! Repository layer abstractions and the SQLite store.
//!
//! # Responsibility
//! - Define the find/insert/count/exists contracts workflows depend on.
//! - Isolate SQL and constraint-violation decoding from workflow logic.
//!
//! # Invariants
//! - Insert paths surface storage constraint violations as semantic
//!   `RepoError` variants, never as raw SQLite errors.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod attendee_repo;
pub mod checkin_repo;
pub mod error;
pub mod event_repo;
pub mod sqlite_store;

pub use attendee_repo::AttendeeRepository;
pub use checkin_repo::CheckInRepository;
pub use error::{RepoError, RepoResult};
pub use event_repo::EventRepository;
pub use sqlite_store::SqliteStore;
