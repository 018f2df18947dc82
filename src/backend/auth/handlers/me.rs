/**
 * Current Identity Handlers
 *
 * This module implements `GET /me` and `POST /me`, which read and edit the
 * profile of the identity behind the `Authorization` header.
 *
 * # Authentication
 *
 * The token is resolved by the `AuthSession` extractor. Member sessions are
 * re-checked against the identity store so a token whose identity is gone
 * fails closed with 401.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{IdentityResponse, MeResponse};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthSession;
use crate::backend::server::state::AppState;
use crate::shared::ProfileUpdate;

/// Get current identity handler
///
/// Admin sessions answer `{"isAdmin": true}` without an identity.
///
/// # Errors
///
/// * `401 Unauthorized` - header missing, token unknown, or identity gone
pub async fn get_me(
    State(state): State<AppState>,
    session: AuthSession,
) -> BackendResult<Json<MeResponse>> {
    let Some(id) = session.member_id() else {
        return Ok(Json(MeResponse {
            is_admin: true,
            identity: None,
        }));
    };

    let identity = state.identities.get(id).await.ok_or_else(|| {
        tracing::warn!("[Auth] Session {} points at a missing identity", id);
        BackendError::unauthorized("session identity no longer exists")
    })?;

    Ok(Json(MeResponse {
        is_admin: false,
        identity: Some(identity),
    }))
}

/// Edit current identity handler
///
/// Only the fields present in the body change.
///
/// # Errors
///
/// * `401 Unauthorized` - header missing, token unknown, or identity gone
/// * `403 Forbidden` - admin session
pub async fn update_me(
    State(state): State<AppState>,
    session: AuthSession,
    Json(update): Json<ProfileUpdate>,
) -> BackendResult<Json<IdentityResponse>> {
    let id = state.sessions.resolve_member(session.token()).await?;
    let identity = state.identities.update_profile(id, update).await?;

    tracing::debug!("[Auth] Profile of {} updated", id);
    Ok(Json(IdentityResponse { identity }))
}
