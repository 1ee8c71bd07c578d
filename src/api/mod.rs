//! Wagon HTTP API
//!
//! HTTP layer for the Wagon site server, built with Axum.
//!
//! # Endpoints
//!
//! ## Status
//! - `GET /api/status` - Liveness report with server time
//! - `GET /api/track` - Cookie-backed visit counter
//!
//! ## Game catalog
//! - `GET /api/games` - List the full catalog
//! - `GET /api/games/search?q=...` - Search game titles
//!
//! ## Exploit listing
//! - `GET /api/exploits` - List the indexed entries
//! - `POST /api/exploits/filter` - Run a filter pass over the index
//! - `POST /api/exploits/reload` - Schedule a debounced reindex
//!
//! ## Static files
//! Every other path is served from the public directory; paths matching
//! nothing get the 404 page. Handler panics become a generic 500 JSON body.

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::any::Any;
use std::sync::Arc;

use axum::{
    handler::Handler,
    http::{header, HeaderValue},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/status", get(routes::status::status))
        .route("/track", get(routes::track::track_visit))
        .route("/games", get(routes::games::list_games))
        .route("/games/search", get(routes::games::search_games))
        .route("/exploits", get(routes::exploits::list_exploits))
        .route("/exploits/filter", post(routes::exploits::filter_exploits))
        .route("/exploits/reload", post(routes::exploits::reload_exploits));

    // Create shared state
    let shared_state = Arc::new(state);

    // Static files for everything outside /api, with the 404 page behind them
    let static_files = ServeDir::new(&shared_state.config.server.public_dir)
        .not_found_service(routes::pages::not_found.with_state(Arc::clone(&shared_state)));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .with_state(shared_state)
}

/// Convert a handler panic into the generic 500 JSON body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    tracing::error!(panic = %detail, "Handler panicked");
    error::internal_error_response()
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("The Wagon Site is live on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Wagon shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
