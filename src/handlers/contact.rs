use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::common::{
    validate_email, validate_optional, validate_required, ApiJson, CreatedResponse,
};
use crate::models::{contact_subject, CreateContactMessage};
use crate::repositories::ContactMessageRepository;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Service the visitor asked about; drives the subject line
    pub service: Option<String>,
    pub message: Option<String>,
}

/// Submit the public contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored", body = CreatedResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Public"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ContactRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let input = CreateContactMessage {
        name: validate_required(payload.name, "name")?,
        email: validate_email(payload.email, "email")?,
        phone: validate_optional(payload.phone).unwrap_or_default(),
        subject: contact_subject(payload.service.as_deref()),
        message: validate_required(payload.message, "message")?,
    };

    let message = ContactMessageRepository::create(&state.db, &input).await?;
    tracing::info!(message_id = message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: message.id,
            message: "Message sent successfully!".to_string(),
        }),
    ))
}
