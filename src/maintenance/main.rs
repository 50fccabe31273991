//! Rewrites legacy project image URLs to the canonical `/api/uploads/{file}` form.
//!
//! Usage: `fix-image-urls [--dry-run]`

use anyhow::Context;

use redline_site::config::Config;
use redline_site::repositories::ProjectRepository;
use redline_site::services::image_url;
use redline_site::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let dry_run = std::env::args().skip(1).any(|arg| arg == "--dry-run");

    let config = Config::from_env_for_tools().context("Failed to load configuration")?;
    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;

    let projects = ProjectRepository::list_with_images(&state.db).await?;
    tracing::info!(count = projects.len(), dry_run, "Checking project image URLs");

    let mut fixed = 0;
    for project in projects {
        let Some(old_url) = project.image_url.as_deref() else {
            continue;
        };
        let Some(new_url) = image_url::canonical_stored_path(old_url) else {
            continue;
        };
        if new_url == old_url {
            continue;
        }

        tracing::info!(project_id = project.id, name = %project.name, old = %old_url, new = %new_url, "Rewriting image URL");
        if !dry_run {
            ProjectRepository::set_image_url(&state.db, project.id, Some(new_url)).await?;
        }
        fixed += 1;
    }

    tracing::info!(fixed, dry_run, "Done");
    Ok(())
}
