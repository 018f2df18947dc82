/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the identity
 * and session handlers. Field names are camelCase on the wire.
 */

use serde::{Deserialize, Serialize};

use crate::shared::Identity;

/// Registration request
///
/// Every field is optional at the JSON level so a missing display name is
/// reported as a validation error rather than a body rejection.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    /// Unique display name, also the login key
    pub display_name: Option<String>,
    /// Avatar glyph or URL; `"default"` when absent
    pub avatar: Option<String>,
    /// Optional login secret; without one the identity is passwordless
    pub credential: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub display_name: String,
    pub credential: Option<String>,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session token for later requests
    pub token: String,
    /// Whether the token carries the admin privilege
    pub is_admin: bool,
}

/// Response wrapping one full identity profile
#[derive(Serialize, Debug)]
pub struct IdentityResponse {
    pub identity: Identity,
}

/// Response of `GET /me`
///
/// Admin sessions have no identity record.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

/// Body carrying only a session token
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct TokenRequest {
    pub token: String,
}
