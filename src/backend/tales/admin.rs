/**
 * Admin Handlers
 *
 * - `POST /admin/login` - exchange the operator secret for an admin token
 * - `GET /admin/pending?adminToken=...` - tales awaiting review
 * - `POST /admin/approve` - approve a tale
 * - `GET /admin/users?adminToken=...` - full profiles of every identity
 *
 * Privilege checks live in `ModerationGate`; these handlers only resolve
 * the token into a principal.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;
use crate::backend::tales::handlers::TaleResponse;
use crate::shared::{Identity, Tale};

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct AdminLoginRequest {
    pub credential: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub admin_token: String,
}

/// `?adminToken=` query of the admin listing endpoints
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminQuery {
    pub admin_token: String,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    #[serde(default)]
    pub admin_token: String,
    pub tale_id: Uuid,
}

/// Admin login handler
///
/// # Errors
///
/// * `401 Unauthorized` - wrong or missing secret
pub async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> BackendResult<Json<AdminLoginResponse>> {
    let admin_token = state
        .sessions
        .admin_login(request.credential.as_deref(), &state.config.admin_secret)
        .await?;

    tracing::info!("[Admin] Admin session opened");
    Ok(Json(AdminLoginResponse { admin_token }))
}

/// Pending review handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown token
/// * `403 Forbidden` - member token
pub async fn get_pending(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> BackendResult<Json<Vec<Tale>>> {
    let session = state.sessions.resolve(&query.admin_token).await?;
    Ok(Json(state.moderation.pending(session.principal).await?))
}

/// Approve handler
///
/// Approving an already approved tale returns it unchanged.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown token
/// * `403 Forbidden` - member token
/// * `404 Not Found` - unknown tale
pub async fn approve_tale(
    State(state): State<AppState>,
    Json(request): Json<ApproveRequest>,
) -> BackendResult<Json<TaleResponse>> {
    let session = state.sessions.resolve(&request.admin_token).await?;
    let tale = state.moderation.approve(session.principal, request.tale_id).await?;
    Ok(Json(TaleResponse { tale }))
}

/// Admin user listing handler
///
/// Unlike `GET /users` this returns full profiles, follows and owned tales
/// included. Credentials are never serialized.
pub async fn list_all_users(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> BackendResult<Json<Vec<Identity>>> {
    state.sessions.resolve_admin(&query.admin_token).await?;
    Ok(Json(state.identities.all().await))
}
