//! Error type for page handlers.
//!
//! Handlers return [`PageResult`] so template failures turn into a plain
//! 500 response instead of a panic.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    /// Template missing or failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            PageError::Template(e) => {
                tracing::error!("Template error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Page could not be rendered",
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for page handlers
pub type PageResult<T> = Result<T, PageError>;
