use passin_core::db::open_db_in_memory;
use passin_core::error::{ALREADY_CHECKED_IN, ATTENDEE_NOT_FOUND};
use passin_core::{
    AttendeeId, CheckInService, ErrorKind, EventService, QueryService, RegisterAttendeeRequest,
    RegisterEventRequest, RegistrationService, SqliteStore,
};
use rusqlite::Connection;
use uuid::Uuid;

fn registered_attendee(conn: &Connection, email: &str) -> AttendeeId {
    let store = SqliteStore::try_new(conn).unwrap();
    let event_id = EventService::new(&store)
        .register_event(&RegisterEventRequest {
            title: format!("Event for {email}"),
            details: "Check-in tests".to_string(),
            maximum_attendees: 5,
        })
        .unwrap();
    RegistrationService::new(&store)
        .register_attendee(
            event_id,
            &RegisterAttendeeRequest {
                name: "Attendee".to_string(),
                email: email.to_string(),
            },
        )
        .unwrap()
}

fn check_in_count(conn: &Connection, attendee_id: AttendeeId) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM check_ins WHERE attendee_id = ?1;",
        [attendee_id.to_string()],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn first_check_in_succeeds_and_second_conflicts() {
    let conn = open_db_in_memory().unwrap();
    let attendee_id = registered_attendee(&conn, "x@x.com");
    let service = CheckInService::new(SqliteStore::try_new(&conn).unwrap());

    service.check_in(attendee_id).unwrap();

    let err = service.check_in(attendee_id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.public_message(), ALREADY_CHECKED_IN);
    assert_eq!(check_in_count(&conn, attendee_id), 1);
}

#[test]
fn unknown_attendee_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = CheckInService::new(SqliteStore::try_new(&conn).unwrap());

    let err = service.check_in(Uuid::new_v4()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.public_message(), ATTENDEE_NOT_FOUND);
}

#[test]
fn check_in_timestamp_appears_once_in_attendee_list() {
    let conn = open_db_in_memory().unwrap();
    let attendee_id = registered_attendee(&conn, "x@x.com");
    let store = SqliteStore::try_new(&conn).unwrap();
    let event_id: String = conn
        .query_row(
            "SELECT event_id FROM attendees WHERE id = ?1;",
            [attendee_id.to_string()],
            |row| row.get(0),
        )
        .unwrap();
    let event_id = Uuid::parse_str(&event_id).unwrap();
    let queries = QueryService::new(&store);

    let before = queries.list_attendees(event_id).unwrap();
    assert_eq!(before[0].checked_in_at, None);

    let check_ins = CheckInService::new(&store);
    check_ins.check_in(attendee_id).unwrap();
    let after_first = queries.list_attendees(event_id).unwrap();
    let stamped = after_first[0]
        .checked_in_at
        .expect("checked_in_at should be populated");

    assert!(check_ins.check_in(attendee_id).is_err());
    let after_second = queries.list_attendees(event_id).unwrap();
    assert_eq!(after_second.len(), 1);
    assert_eq!(after_second[0].checked_in_at, Some(stamped));
    assert_eq!(check_in_count(&conn, attendee_id), 1);
}

#[test]
fn each_attendee_checks_in_independently() {
    let conn = open_db_in_memory().unwrap();
    let first = registered_attendee(&conn, "first@x.com");
    let second = registered_attendee(&conn, "second@x.com");
    let service = CheckInService::new(SqliteStore::try_new(&conn).unwrap());

    let first_check_in = service.check_in(first).unwrap();
    let second_check_in = service.check_in(second).unwrap();
    assert_ne!(first_check_in, second_check_in);
}
