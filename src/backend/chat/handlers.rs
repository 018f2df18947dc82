/**
 * Chat History Handler
 *
 * `GET /profile/{token}/chats/{peer_id}` returns the logged conversation
 * between the session's identity and a peer, oldest first. Live delivery
 * happens over the channel; this endpoint lets a client backfill a thread
 * it opens later.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;
use crate::shared::ChatMessage;

/// Conversation history handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown token
/// * `404 Not Found` - peer identity does not exist
pub async fn get_conversation(
    State(state): State<AppState>,
    Path((token, peer_id)): Path<(String, Uuid)>,
) -> BackendResult<Json<Vec<ChatMessage>>> {
    let id = state.sessions.resolve_member(&token).await?;
    let history = state.router.history(id, peer_id).await?;
    Ok(Json(history))
}
