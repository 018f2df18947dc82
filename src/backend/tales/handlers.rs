/**
 * Tale Handlers
 *
 * - `POST /tales` - submit a tale (always created pending)
 * - `GET /feed` - approved tales, newest first
 * - `GET /profile/{token}/tales` - the caller's own tales in every state
 * - `POST /tales/{id}/repost` - bump the repost count of an approved tale
 *
 * Member endpoints carry the session token in the body or path.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::handlers::types::TokenRequest;
use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;
use crate::backend::tales::store::NewTale;
use crate::shared::Tale;

/// Tale submission request
///
/// `mediaPayload` is the media inline, typically a data URL.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitTaleRequest {
    pub token: String,
    pub media_payload: Option<String>,
    pub media_kind: Option<String>,
    pub caption: Option<String>,
}

/// Response wrapping one tale
#[derive(Serialize, Deserialize, Debug)]
pub struct TaleResponse {
    pub tale: Tale,
}

/// Submit handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown token
/// * `400 Bad Request` - missing payload, missing or unknown media kind
pub async fn submit_tale(
    State(state): State<AppState>,
    Json(request): Json<SubmitTaleRequest>,
) -> BackendResult<(StatusCode, Json<TaleResponse>)> {
    let owner_id = state.sessions.resolve_member(&request.token).await?;
    let tale = state
        .tales
        .submit(
            owner_id,
            NewTale {
                media_payload: request.media_payload,
                media_kind: request.media_kind,
                caption: request.caption,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TaleResponse { tale })))
}

/// Public feed handler
pub async fn get_feed(State(state): State<AppState>) -> Json<Vec<Tale>> {
    Json(state.tales.feed().await)
}

/// Own tales handler
pub async fn get_own_tales(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> BackendResult<Json<Vec<Tale>>> {
    let owner_id = state.sessions.resolve_member(&token).await?;
    Ok(Json(state.tales.owned_by(owner_id).await))
}

/// Repost handler
///
/// Any valid session may repost, the admin included.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown token, or its identity no longer exists
/// * `404 Not Found` - tale absent or still pending
pub async fn repost_tale(
    State(state): State<AppState>,
    Path(tale_id): Path<Uuid>,
    Json(request): Json<TokenRequest>,
) -> BackendResult<Json<TaleResponse>> {
    state.sessions.resolve_active(&request.token).await?;
    let tale = state.tales.repost(tale_id).await?;
    Ok(Json(TaleResponse { tale }))
}
