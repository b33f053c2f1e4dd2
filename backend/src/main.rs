mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod templates;

use anyhow::{Context, Result};
use axum::Router;
use meetup::MeetupApi;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::routes::site_routes;
use crate::state::AppState;
use crate::templates::Templates;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cocoaheads_site=debug,meetup=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing::info!("Starting PDX CocoaHeads site");

    let meetup =
        MeetupApi::new(config.meetup.clone()).context("Failed to create Meetup API client")?;
    let templates = Templates::new().context("Failed to load page templates")?;

    let app = create_app(AppState::new(meetup, templates), &config.public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: AppState, public_dir: &Path) -> Router {
    let app = site_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve static assets if the directory exists
    if public_dir.exists() {
        tracing::info!("Serving static files from {}", public_dir.display());
        app.fallback_service(ServeDir::new(public_dir))
    } else {
        tracing::info!(
            "Public directory not found at {}, serving pages only",
            public_dir.display()
        );
        app
    }
}
