use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::image_url::{self, UPLOADS_PATH};

/// File extensions accepted for project images
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "avif"];

/// Directory-backed store for uploaded project images
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an image under a freshly generated name and return that name
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<String> {
        let ext = image_extension(original_name)?;
        tokio::fs::create_dir_all(&self.root).await?;

        let file_name = generate_file_name(&ext);
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.root.join(&file_name))
            .await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        tracing::info!(file = %file_name, size = bytes.len(), "Stored upload");
        Ok(file_name)
    }

    /// Public URL for a stored file
    pub fn public_url(file_name: &str) -> String {
        format!("{}{}", UPLOADS_PATH, file_name)
    }

    /// Name of the stored file behind an image URL, if it is one of ours
    pub fn resolve_internal(image_url: &str) -> Option<String> {
        image_url::upload_file_name(image_url).map(str::to_string)
    }

    /// Remove a stored file. Returns false when it was already gone.
    pub async fn remove(&self, file_name: &str) -> AppResult<bool> {
        match tokio::fs::remove_file(self.root.join(file_name)).await {
            Ok(()) => {
                tracing::info!(file = %file_name, "Removed upload");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn exists(&self, file_name: &str) -> bool {
        tokio::fs::try_exists(self.root.join(file_name))
            .await
            .unwrap_or(false)
    }

    /// Total bytes held under the store directory
    pub async fn size_bytes(&self) -> AppResult<u64> {
        let mut total = 0;
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            while let Some(entry) = entries.next_entry().await? {
                let metadata = entry.metadata().await?;
                if metadata.is_dir() {
                    pending.push(entry.path());
                } else {
                    total += metadata.len();
                }
            }
        }

        Ok(total)
    }
}

/// Lower-cased extension of an uploaded file, restricted to image types
pub fn image_extension(original_name: &str) -> AppResult<String> {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(AppError::Validation(format!(
            "Unsupported image type '{}'. Supported: {}",
            original_name,
            IMAGE_EXTENSIONS.join(", ")
        )))
    }
}

/// `{unix_seconds}-{random}.{ext}`
fn generate_file_name(ext: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}.{}",
        OffsetDateTime::now_utc().unix_timestamp(),
        &suffix[..12],
        ext
    )
}
