use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One upcoming event as listed by the Meetup API.
///
/// Only the values shown on the "Upcoming Events" page are kept. Serializes
/// with the keys the page template looks up (`utcOffset`, `rsvpCount`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetupEvent {
    /// Event title
    pub name: String,
    /// Start time in milliseconds since the Unix epoch (UTC)
    pub time: i64,
    /// Milliseconds between the event location's timezone and UTC
    pub utc_offset: i64,
    /// Number of people who have said they're attending
    pub rsvp_count: i64,
    /// URL of the event's page on meetup.com
    pub link: String,
}

/// Shape of an event object in the Meetup API's JSON.
#[derive(Debug, Deserialize)]
struct WireEvent {
    name: String,
    time: i64,
    utc_offset: i64,
    yes_rsvp_count: i64,
    link: String,
}

impl MeetupEvent {
    pub fn new(
        name: impl Into<String>,
        time: i64,
        utc_offset: i64,
        rsvp_count: i64,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time,
            utc_offset,
            rsvp_count,
            link: link.into(),
        }
    }

    /// Build an event from one JSON object of the API response.
    ///
    /// Returns `None` unless `value` is an object carrying every field with
    /// the expected type.
    pub fn from_json(value: &Value) -> Option<Self> {
        // Derived structs also accept positional arrays; only keyed objects count.
        value.as_object()?;
        WireEvent::deserialize(value).ok().map(Into::into)
    }
}

impl From<WireEvent> for MeetupEvent {
    fn from(wire: WireEvent) -> Self {
        Self {
            name: wire.name,
            time: wire.time,
            utc_offset: wire.utc_offset,
            rsvp_count: wire.yes_rsvp_count,
            link: wire.link,
        }
    }
}
