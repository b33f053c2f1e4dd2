use axum::{routing::get, Router};

use crate::handlers::{events, health, pages};
use crate::state::AppState;

pub fn site_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))

        // Pages
        .route("/", get(pages::index))
        .route("/topics", get(pages::topics))
        .route("/events", get(events::upcoming_events))
}
