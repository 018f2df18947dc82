/**
 * Login Handler
 *
 * This module implements the login handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the identity by display name (or recognise the reserved admin name)
 * 2. Check the credential
 * 3. Create a session and return its token
 *
 * # Security
 *
 * - Unknown names and wrong credentials both return 401 with the same message
 * - Credentials are never logged or returned in responses
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown display name or wrong credential
///
/// # Example Response
///
/// ```json
/// { "token": "8f14e45f-ceea-4c67-a3a5-0e2ba1c8f1d2", "isAdmin": false }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> BackendResult<Json<LoginResponse>> {
    let principal = state
        .identities
        .authenticate(
            &request.display_name,
            request.credential.as_deref(),
            &state.config.admin_secret,
        )
        .await?;

    let token = state.sessions.create(principal).await;
    tracing::info!("[Auth] Login succeeded for {}", request.display_name.trim());

    Ok(Json(LoginResponse {
        token,
        is_admin: principal.is_admin(),
    }))
}
