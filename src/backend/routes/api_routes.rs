/**
 * API Route Handlers
 *
 * This module defines the JSON API routes.
 *
 * # Routes
 *
 * ## Identity
 * - `POST /auth/register` - Create an identity
 * - `POST /auth/login` - Open a session
 * - `GET /me`, `POST /me` - Read/edit the current identity (Authorization header)
 * - `GET /users` - Public directory
 * - `POST /users/{id}/follow`, `DELETE /users/{id}/follow` - Follow graph
 *
 * ## Tales
 * - `GET /feed` - Approved tales
 * - `POST /tales` - Submit a tale
 * - `POST /tales/{id}/repost` - Repost an approved tale
 * - `GET /profile/{token}/tales` - Own tales
 * - `GET /profile/{token}/chats/{peer_id}` - Conversation history
 *
 * ## Admin
 * - `POST /admin/login`, `GET /admin/pending`, `POST /admin/approve`, `GET /admin/users`
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{
    follow_user, get_me, list_users, login, register, unfollow_user, update_me,
};
use crate::backend::chat::handlers::get_conversation;
use crate::backend::server::state::AppState;
use crate::backend::tales::admin::{admin_login, approve_tale, get_pending, list_all_users};
use crate::backend::tales::handlers::{get_feed, get_own_tales, repost_tale, submit_tale};

/// Configure API routes
///
/// # Authentication
///
/// Tokens travel where the endpoint expects them:
/// - `/me` - `Authorization` header
/// - follow, submit, repost - `token` in the JSON body
/// - `/profile/{token}/...` - path
/// - admin listings - `adminToken` query parameter; approve - JSON body
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Identity endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/me", get(get_me).post(update_me))
        .route("/users", get(list_users))
        .route("/users/{id}/follow", post(follow_user).delete(unfollow_user))
        // Tale endpoints
        .route("/feed", get(get_feed))
        .route("/tales", post(submit_tale))
        .route("/tales/{id}/repost", post(repost_tale))
        .route("/profile/{token}/tales", get(get_own_tales))
        .route("/profile/{token}/chats/{peer_id}", get(get_conversation))
        // Admin endpoints
        .route("/admin/login", post(admin_login))
        .route("/admin/pending", get(get_pending))
        .route("/admin/approve", post(approve_tale))
        .route("/admin/users", get(list_all_users))
}
