/**
 * Channel Routes
 *
 * - `GET /ws` - WebSocket upgrade for the real-time channel
 *
 * Chat messages, presence and approval notices all travel over this one
 * connection; see `realtime::channel` for the frame protocol.
 */

use axum::{routing::get, Router};

use crate::backend::realtime::channel::handle_channel_upgrade;
use crate::backend::server::state::AppState;

/// Configure real-time channel routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/ws", get(handle_channel_upgrade))
}
