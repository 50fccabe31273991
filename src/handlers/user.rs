use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{
    validate_email, validate_required, ApiJson, CreatedResponse, MessageResponse, RecordId,
};
use crate::middlewares::AuthUser;
use crate::models::{CreateUser, UpdateUser, UserResponse};
use crate::repositories::{Repository, UserRepository};
use crate::services::{AuthService, MIN_PASSWORD_LEN};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    /// New password; blank keeps the current one
    pub password: Option<String>,
    pub role_id: Option<i32>,
}

fn validate_password(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

// ============ Handlers ============

/// List admin accounts (the bootstrap account is hidden)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "Admin accounts", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepository::list(&state.db, None).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Add an admin account
#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Username already exists")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let username = validate_required(payload.username, "username")?;
    let email = validate_email(payload.email, "email")?;
    let password = payload
        .password
        .ok_or_else(|| AppError::Validation("password is required".to_string()))?;
    validate_password(&password)?;

    let password_hash = AuthService::hash_password(&password)?;
    let input = CreateUser {
        username,
        email,
        role_id: payload.role_id.unwrap_or(1),
    };

    let user = UserRepository::create(&state.db, &input, &password_hash).await?;
    tracing::info!(user_id = user.id, "Admin account created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: user.id,
            message: "User created".to_string(),
        }),
    ))
}

/// Update an admin account; the password changes only when one is given
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username already exists")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    let username = validate_required(payload.username, "username")?;
    let email = validate_email(payload.email, "email")?;

    let password_hash = match payload.password.filter(|p| !p.is_empty()) {
        Some(password) => {
            validate_password(&password)?;
            Some(AuthService::hash_password(&password)?)
        }
        None => None,
    };

    let input = UpdateUser {
        username,
        email,
        role_id: payload.role_id,
        password_hash,
    };

    UserRepository::update(&state.db, id, &input).await?;
    Ok(Json(MessageResponse::new("User updated")))
}

/// Delete an admin account
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Account cannot be deleted"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
pub async fn delete_user(
    caller: AuthUser,
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    let user = UserRepository::find_by_id(&state.db, id).await?;

    if user.is_bootstrap() {
        return Err(AppError::Forbidden(
            "The bootstrap account cannot be deleted".to_string(),
        ));
    }
    if user.id == caller.id {
        return Err(AppError::Forbidden(
            "You cannot delete your own account".to_string(),
        ));
    }

    UserRepository::delete(&state.db, id).await?;
    tracing::info!(user_id = id, deleted_by = caller.id, "Admin account deleted");
    Ok(Json(MessageResponse::new("User deleted")))
}
