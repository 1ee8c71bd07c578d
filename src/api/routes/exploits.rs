//! Exploit Listing Routes
//!
//! - GET /api/exploits - List the indexed entries
//! - POST /api/exploits/filter - Run a filter pass over the index
//! - POST /api/exploits/reload - Schedule a debounced reindex

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::{
    ExploitFilterRequest, ExploitFilterResponse, ExploitItem, ExploitListResponse,
    ReloadResponse,
};
use crate::api::state::AppState;
use crate::exploits::FilterSelection;

/// GET /api/exploits
///
/// List every indexed exploit entry with its parsed metadata.
pub async fn list_exploits(State(state): State<Arc<AppState>>) -> Json<ExploitListResponse> {
    let index = state.exploits.read().await;
    let items: Vec<ExploitItem> = index.items().iter().map(ExploitItem::from).collect();

    Json(ExploitListResponse {
        total: items.len(),
        items,
    })
}

/// POST /api/exploits/filter
///
/// Partition the raw selection tokens into version and term filters and
/// return the entries passing both. An empty selection returns everything.
pub async fn filter_exploits(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExploitFilterRequest>,
) -> Json<ExploitFilterResponse> {
    let selection = FilterSelection::from_tokens(&req.selected);

    let index = state.exploits.read().await;
    let matched = index.filter(&selection);

    tracing::debug!(
        versions = selection.versions.len(),
        terms = selection.terms.len(),
        matched = matched.len(),
        "Exploit filter pass"
    );

    Json(ExploitFilterResponse {
        total: index.len(),
        matched: matched.len(),
        items: matched.into_iter().map(ExploitItem::from).collect(),
    })
}

/// POST /api/exploits/reload
///
/// Schedule a reindex from the data file. Requests are debounced, so a
/// burst of reloads re-reads the file once; the response only acknowledges
/// scheduling.
pub async fn reload_exploits(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReloadResponse>) {
    state.reindexer.trigger();

    (
        StatusCode::ACCEPTED,
        Json(ReloadResponse {
            status: "scheduled".to_string(),
        }),
    )
}
