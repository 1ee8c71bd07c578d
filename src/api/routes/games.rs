//! Game Catalog Routes
//!
//! - GET /api/games - List the full catalog
//! - GET /api/games/search?q=... - Search game titles

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::{GameListResponse, GameSearchParams, GameSearchResponse};
use crate::api::state::AppState;

/// GET /api/games
///
/// List every game in the catalog, in catalog order.
pub async fn list_games(State(state): State<Arc<AppState>>) -> Json<GameListResponse> {
    let games: Vec<_> = state.games.iter().cloned().collect();

    Json(GameListResponse {
        total: games.len(),
        games,
    })
}

/// GET /api/games/search?q=...
///
/// Case-insensitive substring search over game titles. An empty query
/// returns no matches.
pub async fn search_games(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GameSearchParams>,
) -> Json<GameSearchResponse> {
    let query = params.q.trim().to_lowercase();
    let matches: Vec<_> = state.games.search(&query).into_iter().cloned().collect();

    tracing::debug!(query = %query, matches = matches.len(), "Game search");

    Json(GameSearchResponse {
        total: matches.len(),
        query,
        matches,
    })
}
