use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::{request::Parts, Uri},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Prefix every route is mounted under
pub const API_PREFIX: &str = "/api";

/// JSON body extractor whose rejections use the application error format
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Numeric `{id}` path segment. Anything that is not all digits does not
/// match the route and is reported as an unknown endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = strip_api_prefix(parts.uri.path()).to_string();
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RouteNotFound(path.clone()))?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::RouteNotFound(path));
        }

        raw.parse()
            .map(RecordId)
            .map_err(|_| AppError::RouteNotFound(path))
    }
}

/// Request path with the `/api` prefix removed
pub fn strip_api_prefix(path: &str) -> &str {
    match path.strip_prefix(API_PREFIX) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Fallback for every unmatched method/path pair
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(strip_api_prefix(uri.path()).to_string())
}

/// Trimmed value of a mandatory field; blank counts as missing
pub fn validate_required(value: Option<String>, field: &str) -> AppResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Trimmed value of an optional field; blank becomes None
pub fn validate_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Minimal shape check for e-mail addresses
pub fn validate_email(value: Option<String>, field: &str) -> AppResult<String> {
    let email = validate_required(value, field)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::Validation(format!("{} must be a valid email", field))),
    }
}

/// Plain acknowledgement body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned with 201 Created
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}

/// Body returned by the bulk delete endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteAllResponse {
    pub message: String,
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_api_prefix() {
        assert_eq!(strip_api_prefix("/api/projects"), "/projects");
        assert_eq!(strip_api_prefix("/api"), "/");
        assert_eq!(strip_api_prefix("/apiary"), "/apiary");
        assert_eq!(strip_api_prefix("/other"), "/other");
    }

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required(Some(" a ".into()), "name").unwrap(), "a");
        assert!(validate_required(Some("  ".into()), "name").is_err());
        assert!(validate_required(None, "name").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email(Some("a@x.com".into()), "email").is_ok());
        assert!(validate_email(Some("not-an-email".into()), "email").is_err());
        assert!(validate_email(Some("@x.com".into()), "email").is_err());
    }
}
