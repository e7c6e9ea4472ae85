//! Storage-level constraints hold even when workflow pre-checks are skipped.

use passin_core::db::open_db_in_memory;
use passin_core::{
    Attendee, AttendeeRepository, CheckIn, CheckInRepository, ErrorKind, Event, EventRepository,
    RepoError, SqliteStore, WorkflowError,
};
use uuid::Uuid;

#[test]
fn duplicate_email_insert_is_rejected_by_unique_index() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let event = Event::new("Meetup", "details", 10);
    store.create_event(&event).unwrap();

    store
        .create_attendee(&Attendee::new(event.id, "Ada", "a@x.com"))
        .unwrap();
    let err = store
        .create_attendee(&Attendee::new(event.id, "Ada", "a@x.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::AttendeeAlreadyRegistered(id) if id == event.id));
}

#[test]
fn insert_beyond_capacity_is_rejected_by_trigger() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let event = Event::new("Tiny", "details", 2);
    store.create_event(&event).unwrap();

    store
        .create_attendee(&Attendee::new(event.id, "A", "a@x.com"))
        .unwrap();
    store
        .create_attendee(&Attendee::new(event.id, "B", "b@x.com"))
        .unwrap();
    let err = store
        .create_attendee(&Attendee::new(event.id, "C", "c@x.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::EventCapacityReached(id) if id == event.id));
    assert_eq!(store.count_attendees(event.id).unwrap(), 2);
}

#[test]
fn duplicate_email_at_full_event_is_a_conflict_not_capacity() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let event = Event::new("Solo", "details", 1);
    store.create_event(&event).unwrap();
    store
        .create_attendee(&Attendee::new(event.id, "Ada", "a@x.com"))
        .unwrap();

    let err = store
        .create_attendee(&Attendee::new(event.id, "Ada again", "a@x.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::AttendeeAlreadyRegistered(id) if id == event.id));

    let workflow_err = WorkflowError::from(err);
    assert_eq!(workflow_err.kind(), ErrorKind::Conflict);
    assert_eq!(
        workflow_err.public_message(),
        "You can not register twice on the event."
    );
    assert_eq!(store.count_attendees(event.id).unwrap(), 1);
}

#[test]
fn zero_capacity_event_accepts_nobody() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let event = Event::new("Closed", "details", 0);
    store.create_event(&event).unwrap();

    let err = store
        .create_attendee(&Attendee::new(event.id, "A", "a@x.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::EventCapacityReached(_)));
}

#[test]
fn attendee_for_missing_event_is_rejected_by_foreign_key() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let missing = Uuid::new_v4();

    let err = store
        .create_attendee(&Attendee::new(missing, "A", "a@x.com"))
        .unwrap_err();
    assert!(matches!(err, RepoError::EventNotFound(id) if id == missing));
}

#[test]
fn second_check_in_is_rejected_by_unique_index() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let event = Event::new("Meetup", "details", 10);
    store.create_event(&event).unwrap();
    let attendee = Attendee::new(event.id, "Ada", "a@x.com");
    store.create_attendee(&attendee).unwrap();

    store.create_check_in(&CheckIn::new(attendee.id)).unwrap();
    let err = store
        .create_check_in(&CheckIn::new(attendee.id))
        .unwrap_err();
    assert!(matches!(err, RepoError::AttendeeAlreadyCheckedIn(id) if id == attendee.id));
    assert!(store.has_check_in(attendee.id).unwrap());
}

#[test]
fn check_in_for_missing_attendee_is_rejected_by_foreign_key() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let missing = Uuid::new_v4();

    let err = store.create_check_in(&CheckIn::new(missing)).unwrap_err();
    assert!(matches!(err, RepoError::AttendeeNotFound(id) if id == missing));
}

#[test]
fn duplicate_slug_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    store
        .create_event(&Event::new("Rust Meetup", "first", 10))
        .unwrap();

    let err = store
        .create_event(&Event::new("rust meetup", "second", 10))
        .unwrap_err();
    assert!(matches!(err, RepoError::EventSlugTaken(slug) if slug == "rust-meetup"));
}

#[test]
fn get_event_roundtrips_persisted_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let event = Event::new("Launch Party", "rooftop", 42);
    store.create_event(&event).unwrap();

    assert_eq!(store.get_event(event.id).unwrap(), Some(event));
    assert_eq!(store.get_event(Uuid::new_v4()).unwrap(), None);
}

#[test]
fn corrupted_capacity_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStore::try_new(&conn).unwrap();
    let event = Event::new("Broken", "details", 1);
    store.create_event(&event).unwrap();
    conn.execute(
        "UPDATE events SET maximum_attendees = 5000000000 WHERE id = ?1;",
        [event.id.to_string()],
    )
    .unwrap();

    let err = store.get_event(event.id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
