/**
 * Register Handler
 *
 * This module implements the registration handler for POST /auth/register.
 *
 * Registration only creates the identity; the client logs in afterwards to
 * obtain a session token.
 */
use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{IdentityResponse, RegisterRequest};
use crate::backend::auth::users::IdentityStore;
use crate::backend::error::BackendResult;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - display name missing or blank
/// * `409 Conflict` - display name taken or reserved
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// { "displayName": "alice", "avatar": "🙂" }
/// ```
pub async fn register(
    State(identities): State<IdentityStore>,
    Json(request): Json<RegisterRequest>,
) -> BackendResult<(StatusCode, Json<IdentityResponse>)> {
    let identity = identities
        .register(request.display_name.as_deref(), request.avatar, request.credential)
        .await?;

    Ok((StatusCode::CREATED, Json(IdentityResponse { identity })))
}
