//! # Wagon
//!
//! The Wagon site server: serves the static site from a public directory
//! and exposes a small JSON API for the site's search widgets.
//!
//! ## Features
//!
//! - **Static serving**: public directory with a proper 404 page behind it
//! - **Game search**: case-insensitive title search over the built-in catalog
//! - **Exploit filter**: pre-indexed version/term filtering over the listing
//! - **Visit tracking**: stateless cookie-backed visit counter
//!
//! ## Modules
//!
//! - [`games`]: Game catalog and title search
//! - [`exploits`]: Exploit listing index and filter logic
//! - [`debounce`]: Coalesced background actions (index reloads)
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wagon::api::{serve, AppState};
//! use wagon::config::Config;
//! use wagon::games::GameCatalog;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::build(config, GameCatalog::builtin()).await;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod debounce;
pub mod exploits;
pub mod games;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{Config, ConfigError};

pub use debounce::Debouncer;

pub use exploits::{ExploitEntry, ExploitIndex, FilterSelection, IndexError, IndexedExploit};

pub use games::{GameCatalog, GameEntry};
