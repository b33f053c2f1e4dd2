//! Lenient conversion of the API's event array into [`MeetupEvent`]s.

use serde_json::Value;
use thiserror::Error;

use crate::event::MeetupEvent;

/// Errors while unpacking the Meetup API's JSON data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnpackError {
    #[error("expected a JSON array of events")]
    NotAnArray,
}

/// Transform an array of JSON-coded events into [`MeetupEvent`]s, skipping
/// any that are malformed.
///
/// The returned events keep the order they had in the array.
pub fn unpack_events(json: &Value) -> Result<Vec<MeetupEvent>, UnpackError> {
    let events = json.as_array().ok_or(UnpackError::NotAnArray)?;

    Ok(events.iter().filter_map(MeetupEvent::from_json).collect())
}
