use axum::{extract::State, response::Html};
use meetup::{formatted_date, pluralized_rsvp, MeetupApiError, MeetupEvent};
use minijinja::{context, Value};

use crate::error::PageResult;
use crate::state::AppState;
use crate::templates;

/// "Upcoming Events" page. Always renders; API failures show an empty list.
pub async fn upcoming_events(State(state): State<AppState>) -> PageResult<Html<String>> {
    let events = match state.meetup.get_upcoming_events().await {
        Ok(events) => events,
        Err(e) => {
            log_fetch_error(e);
            Vec::new()
        }
    };

    let page = state
        .templates
        .render(templates::UPCOMING_EVENTS, events_context(&events))?;

    Ok(Html(page))
}

fn log_fetch_error(err: MeetupApiError) {
    match err {
        MeetupApiError::MissingConfigInfo => {
            tracing::warn!("Meetup host, group name or events path not configured")
        }
        MeetupApiError::NoResponse => {
            tracing::warn!("No response from Meetup API")
        }
        MeetupApiError::ResponseInvalidJson => {
            tracing::warn!("Meetup API response was not valid JSON")
        }
        MeetupApiError::ResponseNotAnArray => {
            tracing::warn!("Meetup API response was not an array of events")
        }
    }
}

/// Rendering context for the events template: the events plus the two
/// display helpers, callable as `formattedDate(time, utcOffset)` and
/// `pluralizedRSVP(count)`.
fn events_context(events: &[MeetupEvent]) -> Value {
    context! {
        events => events,
        formattedDate => Value::from_function(
            |time: Option<i64>, utc_offset: Option<i64>| formatted_date(time, utc_offset)
        ),
        pluralizedRSVP => Value::from_function(|count: Option<i64>| pluralized_rsvp(count)),
    }
}
