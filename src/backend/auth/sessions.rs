/**
 * Session Registry
 *
 * This module maps opaque session tokens to principals. Tokens are random
 * UUID v4 strings (122 random bits), created at login and never expired;
 * the only invalidation path is a process restart.
 */

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::IdentityStore;
use crate::backend::error::{BackendError, BackendResult};

/// Who a session acts for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    /// A registered identity
    Member(Uuid),
    /// The operator; owns no tales and has no identity record
    Admin,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        matches!(self, Principal::Admin)
    }

    pub fn member_id(&self) -> Option<Uuid> {
        match self {
            Principal::Member(id) => Some(*id),
            Principal::Admin => None,
        }
    }
}

/// Whether a login attempt carries the operator secret
///
/// Surrounding whitespace in the candidate is ignored.
pub fn admin_secret_matches(candidate: Option<&str>, admin_secret: &str) -> bool {
    candidate.map(str::trim) == Some(admin_secret)
}

/// A login session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub principal: Principal,
    pub created_at: DateTime<Utc>,
}

/// Shared handle to the session registry
///
/// Holds the identity store so member sessions whose identity is gone fail
/// closed.
#[derive(Clone, Debug)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    identities: IdentityStore,
}

impl SessionRegistry {
    pub fn new(identities: IdentityStore) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            identities,
        }
    }

    /// Create a session and return its token
    pub async fn create(&self, principal: Principal) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            token: token.clone(),
            principal,
            created_at: Utc::now(),
        };
        self.sessions.write().await.insert(token.clone(), session);

        tracing::debug!("[Session] Created session for {:?}", principal);
        token
    }

    /// Look up a session by token
    pub async fn resolve(&self, token: &str) -> BackendResult<Session> {
        self.sessions
            .read()
            .await
            .get(token.trim())
            .cloned()
            .ok_or_else(|| BackendError::unauthorized("invalid or missing session token"))
    }

    /// Resolve a token for any principal whose backing record still exists
    ///
    /// Admin sessions always pass; member sessions need a live identity.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - unknown token, or the identity no longer exists
    pub async fn resolve_active(&self, token: &str) -> BackendResult<Session> {
        let session = self.resolve(token).await?;
        if let Some(id) = session.principal.member_id() {
            if !self.identities.exists(id).await {
                tracing::warn!("[Session] Token resolves to missing identity {}", id);
                return Err(BackendError::unauthorized("session identity no longer exists"));
            }
        }
        Ok(session)
    }

    /// Resolve a token that must belong to an existing member identity
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - unknown token, or the identity no longer exists
    /// * `Forbidden` - the token is an admin session
    pub async fn resolve_member(&self, token: &str) -> BackendResult<Uuid> {
        self.resolve_active(token)
            .await?
            .principal
            .member_id()
            .ok_or_else(|| BackendError::forbidden("admin session has no identity"))
    }

    /// Resolve a token that must be an admin session
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - unknown token
    /// * `Forbidden` - a member session
    pub async fn resolve_admin(&self, token: &str) -> BackendResult<()> {
        let session = self.resolve(token).await?;
        if session.principal.is_admin() {
            Ok(())
        } else {
            Err(BackendError::forbidden("admin privilege required"))
        }
    }

    /// Open an admin session when `credential` matches the operator secret
    ///
    /// # Errors
    ///
    /// * `InvalidCredential` - wrong or missing secret
    pub async fn admin_login(&self, credential: Option<&str>, admin_secret: &str) -> BackendResult<String> {
        if !admin_secret_matches(credential, admin_secret) {
            tracing::warn!("[Session] Failed admin login");
            return Err(BackendError::InvalidCredential);
        }
        Ok(self.create(Principal::Admin).await)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
