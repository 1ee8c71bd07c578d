//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::exploits::ExploitIndex;
use crate::games::GameCatalog;

/// Built-in not-found page, used when `public/404.html` is missing
const FALLBACK_404: &str = "<!DOCTYPE html>\n<html>\n<head><title>404 Not Found</title></head>\n<body><h1>404</h1><p>The page you are looking for left the wagon.</p></body>\n</html>\n";

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Game catalog, built once and only read
    pub games: Arc<GameCatalog>,
    /// Exploit index, swapped wholesale on reindex
    pub exploits: Arc<RwLock<ExploitIndex>>,
    /// Debounced reindex trigger
    pub reindexer: Debouncer,
    /// Server configuration
    pub config: Arc<Config>,
    /// The 404 page body, loaded once at startup
    pub not_found_page: Arc<String>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build the application state: load the exploit index and 404 page,
    /// and wire the debounced reindexer to the data file.
    pub async fn build(config: Config, games: GameCatalog) -> Self {
        let index = ExploitIndex::load_or_empty(&config.catalog.exploit_data).await;
        Self::with_index(config, games, index)
    }

    /// Build the application state around an already-constructed index
    pub fn with_index(config: Config, games: GameCatalog, index: ExploitIndex) -> Self {
        let exploits = Arc::new(RwLock::new(index));

        let reindexer = {
            let exploits = Arc::clone(&exploits);
            let data_path = config.catalog.exploit_data.clone();
            let quiet = Duration::from_millis(config.catalog.reindex_debounce_ms);

            Debouncer::new(quiet, move || {
                let exploits = Arc::clone(&exploits);
                let data_path = data_path.clone();
                async move {
                    match ExploitIndex::load(&data_path).await {
                        Ok(index) => {
                            let items = index.len();
                            *exploits.write().await = index;
                            tracing::info!(items, "Exploit index rebuilt");
                        }
                        Err(e) => {
                            tracing::warn!("Reindex failed, keeping previous index: {}", e);
                        }
                    }
                }
            })
        };

        let not_found_page = load_not_found_page(&config);

        Self {
            games: Arc::new(games),
            exploits,
            reindexer,
            config: Arc::new(config),
            not_found_page: Arc::new(not_found_page),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Load `404.html` from the public directory, falling back to a built-in
/// page with a warning.
fn load_not_found_page(config: &Config) -> String {
    let path = config.server.public_dir.join("404.html");
    match std::fs::read_to_string(&path) {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!("No 404 page at {:?} ({}), using built-in page", path, e);
            FALLBACK_404.to_string()
        }
    }
}
