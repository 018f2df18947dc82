/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. Channel routes (WebSocket)
 * 3. API routes (identity, tales, admin)
 * 4. Fallback handler (JSON 404)
 *
 * # Layers
 *
 * - Request body limit from `ServerConfig::max_body_bytes` (tale media
 *   travels inline as data URLs, which exceed axum's 2 MiB default)
 * - `TraceLayer` for per-request spans
 * - Permissive CORS for browser clients served from another origin
 */

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding every store
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let body_limit = app_state.config.max_body_bytes;

    let router = Router::new().route("/health", get(|| async { "ok" }));

    // Add channel routes
    let router = configure_chat_routes(router);

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("no such route") });

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
