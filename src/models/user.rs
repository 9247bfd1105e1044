use crate::entities::user_entity as users;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "koqui@example.com")]
    pub email: String,
    #[schema(example = "Password123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetupUserRequest {
    /// Farcaster id when the user arrives through a frame
    pub fid: Option<i64>,
    #[schema(example = "koqui")]
    pub username: String,
    #[schema(example = "koqui@example.com")]
    pub email: String,
    #[schema(example = "Password123")]
    pub password: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetupUserQuery {
    pub fid: Option<i64>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAvatarRequest {
    pub user_id: i64,
    #[schema(example = "https://example.com/avatar.png")]
    pub avatar_url: String,
}

/// User as exposed to the frontend: snake_case columns remapped to
/// camelCase, no password material of any kind.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub fid: Option<i64>,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub balance: i64,
    pub tickets_count: i64,
    pub total_spent: i64,
    pub is_verified: bool,
    pub joined_at: DateTime<Utc>,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            fid: user.fid,
            username: user.username,
            email: user.email,
            avatar_url: user.avatar_url,
            balance: user.balance,
            tickets_count: user.tickets_count,
            total_spent: user.total_spent,
            is_verified: user.is_verified,
            joined_at: user.joined_at.unwrap_or_else(Utc::now),
        }
    }
}
