use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use time::Date;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{
    validate_optional, validate_required, ApiJson, CreatedResponse, MessageResponse, RecordId,
};
use crate::models::dates::parse_date;
use crate::models::{CreateProject, Project, UpdateProject};
use crate::repositories::{ProjectRepository, Repository};
use crate::services::UploadStore;
use crate::state::AppState;

// ============ Request/Response DTOs ============

/// Body for both create and update. Create requires every field;
/// update treats missing fields as blank.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProjectRequest {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    /// Upload path (`/api/uploads/...`) or external link. Required on create,
    /// blank on update clears it.
    pub image_url: Option<String>,
    /// `YYYY-MM-DD`
    pub completion_date: Option<String>,
}

fn parse_completion_date(value: Option<String>) -> AppResult<Option<Date>> {
    match validate_optional(value) {
        None => Ok(None),
        Some(raw) => parse_date(&raw).map(Some).ok_or_else(|| {
            AppError::Validation("completion_date must be formatted as YYYY-MM-DD".to_string())
        }),
    }
}

// ============ Handlers ============

/// List all projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "List of projects", body = Vec<Project>)
    ),
    tag = "Projects"
)]
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepository::list(&state.db, None).await?;
    Ok(Json(projects))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project details", body = Project),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Project>> {
    let project = ProjectRepository::find_by_id(&state.db, id).await?;
    Ok(Json(project))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProjectRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let name = validate_required(payload.name, "name")?;
    let client_name = validate_required(payload.client_name, "client_name")?;
    let description = validate_required(payload.description, "description")?;
    let image_url = validate_required(payload.image_url, "image_url")?;
    let completion_date = parse_completion_date(Some(validate_required(
        payload.completion_date,
        "completion_date",
    )?))?;

    let input = CreateProject {
        name,
        client_name,
        description,
        image_url: Some(image_url),
        completion_date,
    };

    let project = ProjectRepository::create(&state.db, &input).await?;
    tracing::info!(project_id = project.id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: project.id,
            message: "Project created".to_string(),
        }),
    ))
}

/// Replace a project's fields
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Project not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Projects"
)]
pub async fn update_project(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ApiJson(payload): ApiJson<ProjectRequest>,
) -> AppResult<Json<MessageResponse>> {
    let input = UpdateProject {
        name: payload.name.unwrap_or_default().trim().to_string(),
        client_name: payload.client_name.unwrap_or_default().trim().to_string(),
        description: payload.description.unwrap_or_default().trim().to_string(),
        image_url: validate_optional(payload.image_url),
        completion_date: parse_completion_date(payload.completion_date)?,
    };

    ProjectRepository::update(&state.db, id, &input).await?;
    Ok(Json(MessageResponse::new("Project updated")))
}

/// Delete a project and the uploaded image it owns
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Project not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<MessageResponse>> {
    let project = ProjectRepository::find_by_id(&state.db, id).await?;
    ProjectRepository::delete(&state.db, id).await?;

    let owned_file = project
        .image_url
        .as_deref()
        .and_then(UploadStore::resolve_internal);
    if let Some(file_name) = owned_file {
        // The row is gone either way; a leftover file is only worth a warning.
        if let Err(e) = state.uploads.remove(&file_name).await {
            tracing::warn!(project_id = id, file = %file_name, "Failed to remove project image: {}", e);
        }
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted")))
}
