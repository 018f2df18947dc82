/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container. It holds one handle
 * per store, all built once at startup and wired together here:
 * - Identity store and session registry
 * - Tale store and the moderation gate that approves tales
 * - Presence directory of live channels
 * - Message router and its conversation log
 *
 * # Thread Safety
 *
 * Every store is a cheap `Clone` handle over `Arc<RwLock<..>>`, so cloning
 * `AppState` into a handler or a channel task shares the same data.
 *
 * # Example
 *
 * ```rust
 * use zcode::backend::server::state::AppState;
 * use zcode::backend::tales::store::TaleStore;
 * use axum::extract::State;
 *
 * async fn handler(State(tales): State<TaleStore>) {
 *     let feed = tales.feed().await;
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::SessionRegistry;
use crate::backend::auth::users::IdentityStore;
use crate::backend::chat::log::ConversationLog;
use crate::backend::chat::router::MessageRouter;
use crate::backend::realtime::presence::PresenceDirectory;
use crate::backend::server::config::ServerConfig;
use crate::backend::tales::moderation::ModerationGate;
use crate::backend::tales::store::TaleStore;

/// Application state shared by every handler and channel task
#[derive(Clone, Debug)]
pub struct AppState {
    /// Validated runtime configuration
    pub config: Arc<ServerConfig>,

    /// Registered identities
    pub identities: IdentityStore,

    /// Token → principal map
    pub sessions: SessionRegistry,

    /// Submitted tales in every moderation state
    pub tales: TaleStore,

    /// Sole path from pending to approved
    pub moderation: ModerationGate,

    /// Identity → live channel
    pub presence: PresenceDirectory,

    /// Direct message routing and history
    pub router: MessageRouter,
}

impl AppState {
    /// Build empty stores and wire them together
    pub fn new(config: ServerConfig) -> Self {
        let identities = IdentityStore::new();
        let sessions = SessionRegistry::new(identities.clone());
        let tales = TaleStore::new(identities.clone(), config.tale_reward);
        let presence = PresenceDirectory::new(identities.clone());
        let moderation = ModerationGate::new(
            tales.clone(),
            identities.clone(),
            presence.clone(),
            config.approval_reward,
        );
        let router = MessageRouter::new(
            identities.clone(),
            presence.clone(),
            ConversationLog::new(),
            config.message_reward,
        );

        Self {
            config: Arc::new(config),
            identities,
            sessions,
            tales,
            moderation,
            presence,
            router,
        }
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for IdentityStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.identities.clone()
    }
}

/// Lets extractors such as `AuthSession` resolve tokens without the full state
impl FromRef<AppState> for SessionRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for TaleStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tales.clone()
    }
}

impl FromRef<AppState> for ModerationGate {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.moderation.clone()
    }
}

impl FromRef<AppState> for PresenceDirectory {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.presence.clone()
    }
}

impl FromRef<AppState> for MessageRouter {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.router.clone()
    }
}
