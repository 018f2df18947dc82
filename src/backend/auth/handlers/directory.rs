/**
 * User Directory Handlers
 *
 * - `GET /users` - public summaries of every identity with its online flag
 * - `POST /users/{id}/follow` - follow an identity
 * - `DELETE /users/{id}/follow` - stop following an identity
 *
 * Follow endpoints take the session token in the JSON body.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::auth::handlers::types::{IdentityResponse, TokenRequest};
use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;
use crate::shared::IdentitySummary;

/// List every identity with its online flag, in registration order
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<IdentitySummary>> {
    Json(state.presence.snapshot().await)
}

/// Follow handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown token
/// * `400 Bad Request` - following yourself
/// * `404 Not Found` - target identity does not exist
pub async fn follow_user(
    State(state): State<AppState>,
    Path(target_id): Path<Uuid>,
    Json(request): Json<TokenRequest>,
) -> BackendResult<Json<IdentityResponse>> {
    let follower_id = state.sessions.resolve_member(&request.token).await?;
    let identity = state.identities.follow(follower_id, target_id).await?;

    tracing::debug!("[Directory] {} follows {}", follower_id, target_id);
    Ok(Json(IdentityResponse { identity }))
}

/// Unfollow handler
///
/// Unfollowing someone you do not follow is a no-op.
pub async fn unfollow_user(
    State(state): State<AppState>,
    Path(target_id): Path<Uuid>,
    Json(request): Json<TokenRequest>,
) -> BackendResult<Json<IdentityResponse>> {
    let follower_id = state.sessions.resolve_member(&request.token).await?;
    let identity = state.identities.unfollow(follower_id, target_id).await?;

    tracing::debug!("[Directory] {} unfollowed {}", follower_id, target_id);
    Ok(Json(IdentityResponse { identity }))
}
