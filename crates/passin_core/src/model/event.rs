//! Event domain model.
//!
//! # Invariants
//! - `maximum_attendees` is fixed at creation.
//! - `slug` is derived from `title` by [`slugify`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a registrable event.
pub type EventId = Uuid;

/// A registrable gathering with a fixed attendee capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub details: String,
    /// URL-friendly form of `title`, unique across events.
    pub slug: String,
    pub maximum_attendees: u32,
}

impl Event {
    /// Creates a new event with a generated id and a slug derived from
    /// `title`.
    ///
    /// Does not validate inputs; see `service::event_service`.
    pub fn new(
        title: impl Into<String>,
        details: impl Into<String>,
        maximum_attendees: u32,
    ) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id: Uuid::new_v4(),
            title,
            details: details.into(),
            slug,
            maximum_attendees,
        }
    }
}

/// Read model for the get-event query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event: Event,
    /// Attendees registered at query time.
    pub attendees_amount: u32,
}

/// Lowercases `title` and joins its ASCII alphanumeric runs with `-`.
///
/// `"Rust Meetup: 2026!"` becomes `"rust-meetup-2026"`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::{slugify, Event};

    #[test]
    fn slugify_collapses_separators_and_trims_edges() {
        assert_eq!(slugify("  Rust Meetup: 2026! "), "rust-meetup-2026");
        assert_eq!(slugify("NLW--Unite"), "nlw-unite");
    }

    #[test]
    fn slugify_drops_non_ascii_characters() {
        assert_eq!(slugify("Café Día"), "caf-d-a");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn new_event_derives_slug_and_fresh_id() {
        let first = Event::new("Launch Party", "rooftop", 10);
        let second = Event::new("Launch Party", "rooftop", 10);
        assert_eq!(first.slug, "launch-party");
        assert_ne!(first.id, second.id);
    }
}
