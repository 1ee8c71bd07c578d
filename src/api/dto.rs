//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::exploits::IndexedExploit;
use crate::games::GameEntry;

// ============================================
// STATUS / TRACK DTOs
// ============================================

/// GET /api/status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always "online" while the server is serving
    pub status: String,
    /// Current server time, RFC 3339
    pub timestamp: String,
    pub message: String,
}

/// GET /api/track response
#[derive(Debug, Serialize, Deserialize)]
pub struct TrackResponse {
    pub message: String,
    /// The incremented visit count echoed back to the client
    pub visit_count: u64,
}

// ============================================
// GAME SEARCH DTOs
// ============================================

/// Query parameters for GET /api/games/search
#[derive(Debug, Deserialize)]
pub struct GameSearchParams {
    /// Search query; empty or missing yields no matches
    #[serde(default)]
    pub q: String,
}

/// GET /api/games response
#[derive(Debug, Serialize, Deserialize)]
pub struct GameListResponse {
    pub total: usize,
    pub games: Vec<GameEntry>,
}

/// GET /api/games/search response
#[derive(Debug, Serialize, Deserialize)]
pub struct GameSearchResponse {
    /// The normalized query that was searched
    pub query: String,
    pub total: usize,
    pub matches: Vec<GameEntry>,
}

// ============================================
// EXPLOIT FILTER DTOs
// ============================================

/// POST /api/exploits/filter request
#[derive(Debug, Serialize, Deserialize)]
pub struct ExploitFilterRequest {
    /// Raw selection tokens; numeric tokens select versions, the rest
    /// select terms
    #[serde(default)]
    pub selected: Vec<String>,
}

/// A single exploit item in a listing or filter response
#[derive(Debug, Serialize, Deserialize)]
pub struct ExploitItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Parsed firmware version requirements
    pub versions: Vec<f64>,
    /// Parsed search terms
    pub terms: Vec<String>,
}

impl From<&IndexedExploit> for ExploitItem {
    fn from(item: &IndexedExploit) -> Self {
        Self {
            title: item.entry.title.clone(),
            url: item.entry.url.clone(),
            summary: item.entry.summary.clone(),
            versions: item.versions.clone(),
            terms: item.terms.clone(),
        }
    }
}

/// GET /api/exploits response
#[derive(Debug, Serialize, Deserialize)]
pub struct ExploitListResponse {
    pub total: usize,
    pub items: Vec<ExploitItem>,
}

/// POST /api/exploits/filter response
#[derive(Debug, Serialize, Deserialize)]
pub struct ExploitFilterResponse {
    /// Number of indexed entries
    pub total: usize,
    /// Number of entries passing the filter
    pub matched: usize,
    pub items: Vec<ExploitItem>,
}

/// POST /api/exploits/reload response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    /// "scheduled" once the debounced reindex is queued
    pub status: String,
}
