use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account able to obtain tokens.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
}

/// Claims carried by every issued token.
///
/// `orig_iat` is the issue time of the first token in a refresh chain and
/// bounds how long the chain can be extended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub username: String,
    pub exp: i64,
    pub orig_iat: i64,
}

/// Result of a successful `token_auth` or `refresh_token` call.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub payload: TokenPayload,
    /// Unix timestamp after which the token can no longer be refreshed.
    pub refresh_expires_in: i64,
}

/// Identity resolved from a verified token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
}

impl From<reel_entity::user::Model> for User {
    fn from(model: reel_entity::user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
