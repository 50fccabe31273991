use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{
    validate_email, validate_optional, validate_required, ApiJson, CreatedResponse,
    DeleteAllResponse, MessageResponse, RecordId,
};
use crate::models::dates::parse_date;
use crate::models::{CreateServiceRequest, RequestStatus, ServiceRequest};
use crate::repositories::{Repository, ServiceRequestRepository, LATEST_LIMIT};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct ServiceRequestRequest {
    /// Catalog id of the service, when known
    pub service_id: Option<i32>,
    pub service_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub details: Option<String>,
    /// `YYYY-MM-DD`
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// `pending` or `completed`
    pub status: Option<String>,
}

// ============ Handlers ============

/// Submit the public service booking form
#[utoipa::path(
    post,
    path = "/api/service-requests",
    request_body = ServiceRequestRequest,
    responses(
        (status = 201, description = "Request stored", body = CreatedResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Public"
)]
pub async fn submit_service_request(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ServiceRequestRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let preferred_date = match validate_optional(payload.preferred_date) {
        None => None,
        Some(raw) => Some(parse_date(&raw).ok_or_else(|| {
            AppError::Validation("preferred_date must be formatted as YYYY-MM-DD".to_string())
        })?),
    };

    let input = CreateServiceRequest {
        service_id: payload.service_id.filter(|id| *id > 0),
        service_name: validate_required(payload.service_name, "service_name")?,
        customer_name: validate_required(payload.customer_name, "customer_name")?,
        customer_email: validate_email(payload.customer_email, "customer_email")?,
        customer_phone: validate_required(payload.customer_phone, "customer_phone")?,
        details: validate_optional(payload.details).unwrap_or_default(),
        preferred_date,
        preferred_time: validate_optional(payload.preferred_time),
    };

    let request = ServiceRequestRepository::create(&state.db, &input).await?;
    tracing::info!(request_id = request.id, service = %request.service_name, "Service request received");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: request.id,
            message: "Request submitted successfully!".to_string(),
        }),
    ))
}

/// Latest service requests, newest first
#[utoipa::path(
    get,
    path = "/api/admin/service-requests",
    responses(
        (status = 200, description = "Latest service requests", body = Vec<ServiceRequest>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Service Requests"
)]
pub async fn list_service_requests(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ServiceRequest>>> {
    let requests = ServiceRequestRepository::list(&state.db, Some(LATEST_LIMIT)).await?;
    Ok(Json(requests))
}

/// Change a request's status
#[utoipa::path(
    put,
    path = "/api/admin/service-requests/{id}/status",
    params(
        ("id" = i32, Path, description = "Service request ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Service Requests"
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<UpdateStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    let status: RequestStatus = validate_required(payload.status, "status")?
        .parse()
        .map_err(AppError::Validation)?;

    ServiceRequestRepository::update_status(&state.db, id, status).await?;
    tracing::info!(request_id = id, %status, "Service request status updated");
    Ok(Json(MessageResponse::new("Request status updated")))
}

/// Delete one service request
#[utoipa::path(
    delete,
    path = "/api/admin/service-requests/{id}",
    params(
        ("id" = i32, Path, description = "Service request ID")
    ),
    responses(
        (status = 200, description = "Request deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Service Requests"
)]
pub async fn delete_service_request(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    ServiceRequestRepository::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Service request deleted")))
}

/// Delete every service request
#[utoipa::path(
    delete,
    path = "/api/admin/service-requests/all",
    responses(
        (status = 200, description = "All requests deleted", body = DeleteAllResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Service Requests"
)]
pub async fn delete_all_service_requests(
    State(state): State<AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let deleted = ServiceRequestRepository::delete_all(&state.db).await?;
    tracing::info!(deleted, "Deleted all service requests");
    Ok(Json(DeleteAllResponse {
        message: "All service requests deleted".to_string(),
        deleted,
    }))
}
