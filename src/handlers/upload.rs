use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::services::UploadStore;
use crate::state::AppState;

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    /// Path to store in `image_url`
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Upload a project image
#[utoipa::path(
    post,
    path = "/api/upload/project-image",
    request_body(content_type = "multipart/form-data", description = "Form with an `image` file field"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Missing or unsupported file"),
        (status = 413, description = "File exceeds the upload limit"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Uploads"
)]
pub async fn upload_project_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue; // ignore unknown fields
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((file_name, data.to_vec()));
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("Please upload a file".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let stored = state.uploads.save(&file_name, &data).await?;

    Ok(Json(UploadResponse {
        image_url: UploadStore::public_url(&stored),
    }))
}
