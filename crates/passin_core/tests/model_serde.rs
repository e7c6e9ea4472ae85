//! Read models keep a stable serde shape for hosts that export them directly.

use passin_core::{AttendeeRecord, Event, EventDetails};
use serde_json::json;
use uuid::Uuid;

#[test]
fn attendee_record_serializes_pending_check_in_as_null() {
    let id = Uuid::new_v4();
    let record = AttendeeRecord {
        id,
        name: "Ada".to_string(),
        email: "a@x.com".to_string(),
        created_at: 1_700_000_000_000,
        checked_in_at: None,
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "id": id.to_string(),
            "name": "Ada",
            "email": "a@x.com",
            "created_at": 1_700_000_000_000_i64,
            "checked_in_at": null,
        })
    );

    let checked_in = AttendeeRecord {
        checked_in_at: Some(1_700_000_360_000),
        ..record
    };
    let text = serde_json::to_string(&checked_in).unwrap();
    let back: AttendeeRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(back, checked_in);
}

#[test]
fn event_details_nests_event_beside_live_count() {
    let event = Event::new("Rust Meetup", "talks", 30);
    let details = EventDetails {
        event: event.clone(),
        attendees_amount: 7,
    };

    let value = serde_json::to_value(&details).unwrap();
    assert_eq!(value["attendees_amount"], json!(7));
    assert_eq!(value["event"]["slug"], json!("rust-meetup"));
    assert_eq!(value["event"]["maximum_attendees"], json!(30));
    assert_eq!(value["event"]["id"], json!(event.id.to_string()));

    let back: EventDetails = serde_json::from_value(value).unwrap();
    assert_eq!(back, details);
}

#[test]
fn event_with_negative_capacity_is_rejected_on_deserialize() {
    let payload = json!({
        "id": Uuid::new_v4().to_string(),
        "title": "Broken",
        "details": "x",
        "slug": "broken",
        "maximum_attendees": -1,
    });

    assert!(serde_json::from_value::<Event>(payload).is_err());
}
