use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::models::User;
use crate::repositories::{Repository, UserRepository};
use crate::services::AuthService;
use crate::state::AppState;

/// The admin behind the current request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Handlers behind [`auth_middleware`] take `AuthUser` as an argument.
/// Anywhere else it rejects with 401.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Gate for the admin routes. The bearer token must verify and its account
/// must still exist; a deleted admin's token stops working immediately.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    let claims = AuthService::verify_token(token.trim(), &state.config)?;

    let user = match UserRepository::find_by_id(&state.db, claims.sub).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => {
            tracing::warn!(user_id = claims.sub, "Token for a deleted account");
            return Err(AppError::Unauthorized);
        }
        Err(e) => return Err(e),
    };

    tracing::debug!(user_id = user.id, "Authenticated admin request");
    request.extensions_mut().insert(AuthUser::from(user));

    Ok(next.run(request).await)
}
