//! Display helpers for the upcoming-events page.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Offset used when an event carries no usable timezone: UTC-7, the
/// group's local time.
pub const DEFAULT_UTC_OFFSET_MILLIS: i64 = -25_200_000;

const UNKNOWN_DATE: &str = "Unknown date";

/// Format an event's millisecond timestamp into a readable date in the
/// event's own timezone, e.g. `Wednesday, August 10, 2016 at 6:30 PM`.
pub fn formatted_date(time: Option<i64>, utc_offset: Option<i64>) -> String {
    let Some(milliseconds) = time else {
        return UNKNOWN_DATE.to_string();
    };

    let offset = utc_offset
        .and_then(offset_from_millis)
        .or_else(|| offset_from_millis(DEFAULT_UTC_OFFSET_MILLIS))
        .unwrap_or_else(|| Utc.fix());

    match DateTime::from_timestamp(milliseconds / 1000, 0) {
        Some(utc) => utc
            .with_timezone(&offset)
            .format("%A, %B %-d, %Y at %-I:%M %p")
            .to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

fn offset_from_millis(millis: i64) -> Option<FixedOffset> {
    let seconds = i32::try_from(millis / 1000).ok()?;
    FixedOffset::east_opt(seconds)
}

/// Phrase fragment agreeing with the RSVP count: "1 person is going",
/// "3 people are going".
pub fn pluralized_rsvp(count: Option<i64>) -> &'static str {
    match count {
        Some(1) => "person is",
        _ => "people are",
    }
}
