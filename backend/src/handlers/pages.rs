use axum::{extract::State, response::Html};
use minijinja::context;

use crate::error::PageResult;
use crate::state::AppState;
use crate::templates;

pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    Ok(Html(state.templates.render(templates::INDEX, context! {})?))
}

pub async fn topics(State(state): State<AppState>) -> PageResult<Html<String>> {
    Ok(Html(state.templates.render(templates::TOPICS, context! {})?))
}
