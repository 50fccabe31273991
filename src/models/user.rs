use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Username of the seeded account that never shows up in listings
pub const BOOTSTRAP_USERNAME: &str = "Webmaster";

#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: i32,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn is_bootstrap(&self) -> bool {
        self.username == BOOTSTRAP_USERNAME
    }
}

/// User creation DTO (password already hashed)
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub role_id: i32,
}

/// User update DTO
#[derive(Debug)]
pub struct UpdateUser {
    pub username: String,
    pub email: String,
    pub role_id: Option<i32>,
    /// New argon2 hash, only when a new password was supplied
    pub password_hash: Option<String>,
}

/// Public user response (safe to return via API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role_id: user.role_id,
            created_at: user.created_at,
        }
    }
}

/// Compact user summary returned at login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: i32,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.username.clone(),
            role: user.role_id,
        }
    }
}
