use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::handlers::common::{DeleteAllResponse, MessageResponse, RecordId};
use crate::models::ContactMessage;
use crate::repositories::{ContactMessageRepository, Repository, LATEST_LIMIT};
use crate::state::AppState;

/// Latest contact messages, newest first
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    responses(
        (status = 200, description = "Latest messages", body = Vec<ContactMessage>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Messages"
)]
pub async fn list_messages(State(state): State<AppState>) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactMessageRepository::list(&state.db, Some(LATEST_LIMIT)).await?;
    Ok(Json(messages))
}

/// Mark a message as read
#[utoipa::path(
    put,
    path = "/api/admin/messages/{id}/read",
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked as read", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Message not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Messages"
)]
pub async fn mark_message_read(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    ContactMessageRepository::mark_read(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Message marked as read")))
}

/// Delete one message
#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Message not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Messages"
)]
pub async fn delete_message(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    ContactMessageRepository::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Message deleted")))
}

/// Delete every message
#[utoipa::path(
    delete,
    path = "/api/admin/messages/all",
    responses(
        (status = 200, description = "All messages deleted", body = DeleteAllResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Messages"
)]
pub async fn delete_all_messages(
    State(state): State<AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let deleted = ContactMessageRepository::delete_all(&state.db).await?;
    tracing::info!(deleted, "Deleted all messages");
    Ok(Json(DeleteAllResponse {
        message: "All messages deleted".to_string(),
        deleted,
    }))
}
