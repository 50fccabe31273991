pub mod contact_message;
pub mod project;
pub mod service_request;
pub mod user;

pub use contact_message::ContactMessageRepository;
pub use project::ProjectRepository;
pub use service_request::ServiceRequestRepository;
pub use user::UserRepository;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::AppResult;

/// Cap for the admin inbox listings
pub const LATEST_LIMIT: u64 = 100;

/// Base repository trait for common CRUD operations
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<T>;

    /// Delete entity by ID
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()>;

    /// List entities newest first, optionally capped
    async fn list(db: &DatabaseConnection, limit: Option<u64>) -> AppResult<Vec<T>>;

    /// Count total entities
    async fn count(db: &DatabaseConnection) -> AppResult<u64>;
}
