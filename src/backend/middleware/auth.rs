/**
 * Authentication Extractor
 *
 * This module resolves the session behind a request's `Authorization`
 * header. Both `Bearer <token>` and a bare token are accepted, since
 * simple clients send the token exactly as login returned it.
 *
 * Endpoints that carry the token in the JSON body, path or query resolve
 * it through `SessionRegistry` directly instead.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::sessions::{Session, SessionRegistry};
use crate::backend::error::{BackendError, BackendResult};

/// Session resolved from the `Authorization` header
#[derive(Clone, Debug)]
pub struct AuthSession(pub Session);

impl AuthSession {
    /// Member identity of this session, if it is not an admin session
    pub fn member_id(&self) -> Option<Uuid> {
        self.0.principal.member_id()
    }

    pub fn is_admin(&self) -> bool {
        self.0.principal.is_admin()
    }

    pub fn token(&self) -> &str {
        &self.0.token
    }
}

/// Pull the raw token out of the `Authorization` header
pub fn extract_token(headers: &HeaderMap) -> BackendResult<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            tracing::debug!("[Auth] Missing Authorization header");
            BackendError::unauthorized("missing Authorization header")
        })?;

    Ok(value.strip_prefix("Bearer ").unwrap_or(value).trim())
}

impl<S> FromRequestParts<S> for AuthSession
where
    SessionRegistry: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)?;
        let sessions = SessionRegistry::from_ref(state);
        let session = sessions.resolve(token).await?;
        Ok(AuthSession(session))
    }
}
