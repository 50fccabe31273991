use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{validate_required, ApiJson};
use crate::middlewares::AuthUser;
use crate::models::{UserResponse, UserSummary};
use crate::repositories::{Repository, UserRepository};
use crate::services::AuthService;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address or username
    #[serde(alias = "username")]
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    /// Bearer token for the admin endpoints
    pub token: String,
    pub user: UserSummary,
}

// ============ Handlers ============

/// Log in with email (or username) and password
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let login = validate_required(payload.email, "email")?;
    let password = payload
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("password is required".to_string()))?;

    // Unknown account and wrong password look the same to the caller
    let user = match UserRepository::find_by_login(&state.db, &login).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => {
            AuthService::verify_unknown_account(&password);
            return Err(AppError::InvalidCredentials);
        }
        Err(e) => return Err(e),
    };

    if !AuthService::verify_password(&password, &user.password_hash) {
        tracing::warn!(user_id = user.id, "Failed admin login");
        return Err(AppError::InvalidCredentials);
    }

    let token = AuthService::generate_token(user.id, &user.username, &state.config)?;
    tracing::info!(user_id = user.id, "Admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: UserSummary::from(&user),
    }))
}

/// Get the currently authenticated admin
#[utoipa::path(
    get,
    path = "/api/admin/me",
    responses(
        (status = 200, description = "Current admin", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth"
)]
pub async fn me(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<UserResponse>> {
    let user_data = UserRepository::find_by_id(&state.db, user.id).await?;
    Ok(Json(user_data.into()))
}
