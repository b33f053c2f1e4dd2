use meetup::MeetupApi;
use std::sync::Arc;

use crate::templates::Templates;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub meetup: MeetupApi,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(meetup: MeetupApi, templates: Templates) -> Self {
        Self {
            meetup,
            templates: Arc::new(templates),
        }
    }
}
