//! Page Fallbacks
//!
//! The not-found handler behind the static file service: any path that
//! matches neither a route nor a file in the public directory lands here.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

/// Serve the 404 page (preloaded at startup) with a 404 status.
pub async fn not_found(
    State(state): State<Arc<crate::api::state::AppState>>,
) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(state.not_found_page.as_ref().clone()),
    )
}
