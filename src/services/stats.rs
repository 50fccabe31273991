use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::error::AppResult;
use crate::models::{AdminStats, RequestStatus};
use crate::repositories::{
    ContactMessageRepository, ProjectRepository, Repository, ServiceRequestRepository,
    UserRepository,
};
use crate::services::UploadStore;

pub struct StatsService;

impl StatsService {
    /// Gather the dashboard counters
    pub async fn collect(
        db: &DatabaseConnection,
        uploads: &UploadStore,
        started_at: Instant,
    ) -> AppResult<AdminStats> {
        let total_messages = ContactMessageRepository::count(db).await?;
        let unread_messages = ContactMessageRepository::count_unread(db).await?;
        let total_requests = ServiceRequestRepository::count(db).await?;
        let pending_requests =
            ServiceRequestRepository::count_by_status(db, RequestStatus::Pending).await?;
        let completed_requests =
            ServiceRequestRepository::count_by_status(db, RequestStatus::Completed).await?;
        let total_projects = ProjectRepository::count(db).await?;
        let total_users = UserRepository::count(db).await?;
        let storage_used = uploads.size_bytes().await?;

        Ok(AdminStats {
            total_messages,
            unread_messages,
            read_messages: total_messages.saturating_sub(unread_messages),
            total_requests,
            pending_requests,
            completed_requests,
            total_projects,
            total_users,
            storage_used,
            server_uptime: started_at.elapsed().as_secs(),
        })
    }
}
