/**
 * Server Initialization
 *
 * This module builds the Axum application from a validated configuration.
 *
 * # Initialization Process
 *
 * 1. Create the stores and wire them into `AppState`
 * 2. Create and configure the router
 *
 * All state is in memory; a fresh app starts empty.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!(
        "[Server] Initializing Z-Code backend (tale reward {}, approval reward {}, message reward {})",
        config.tale_reward,
        config.approval_reward,
        config.message_reward
    );

    let app_state = AppState::new(config);
    create_router(app_state)
}

/// Create the application and return the state behind it
///
/// Lets tests and embedders inspect or seed the stores the router serves.
pub fn create_app_with_state(config: ServerConfig) -> (Router<()>, AppState) {
    let app_state = AppState::new(config);
    (create_router(app_state.clone()), app_state)
}
