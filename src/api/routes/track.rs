//! Visit Tracker Route
//!
//! - GET /api/track - Cookie-backed visit counter
//!
//! The counter lives entirely in the client's cookie; the server holds no
//! per-visitor state. An absent or unparsable cookie counts as zero visits.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::api::dto::TrackResponse;
use crate::api::state::AppState;

/// GET /api/track
///
/// Increments the visit counter stored in the client's cookie and echoes
/// the new count back.
pub async fn track_visit(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<TrackResponse>) {
    let tracker = &state.config.tracker;

    let visits: u64 = jar
        .get(&tracker.cookie_name)
        .and_then(|cookie| cookie.value().parse().ok())
        .unwrap_or(0);
    let visits = visits.saturating_add(1);

    let mut cookie = Cookie::new(tracker.cookie_name.clone(), visits.to_string());
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::seconds(tracker.max_age_secs));

    tracing::debug!(visits, "Visit tracked");

    let jar = jar.add(cookie);
    let body = TrackResponse {
        message: format!("This is visit #{}", visits),
        visit_count: visits,
    };

    (jar, Json(body))
}
