//! Upcoming-events pipeline for the group website.
//!
//! Fetches the group's events from the Meetup.com API, unpacks the JSON
//! leniently into [`MeetupEvent`]s and provides the display helpers the
//! events page renders them with.

pub mod api;
pub mod config;
pub mod event;
pub mod format;
pub mod unpack;

pub use api::{HttpTransport, MeetupApi, MeetupApiError, Transport, TransportError};
pub use config::MeetupConfig;
pub use event::MeetupEvent;
pub use format::{formatted_date, pluralized_rsvp, DEFAULT_UTC_OFFSET_MILLIS};
pub use unpack::{unpack_events, UnpackError};
