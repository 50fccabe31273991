use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entity::project::{self, ActiveModel, Column, Entity as ProjectEntity};
use crate::error::{AppError, AppResult};
use crate::models::{CreateProject, Project, UpdateProject};
use crate::repositories::Repository;

/// Project repository for database operations
pub struct ProjectRepository;

#[async_trait]
impl Repository<Project> for ProjectRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Project> {
        let model = ProjectEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = ProjectEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Project".to_string()));
        }

        Ok(())
    }

    async fn list(db: &DatabaseConnection, limit: Option<u64>) -> AppResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = ProjectEntity::find().count(db).await?;
        Ok(count)
    }
}

impl ProjectRepository {
    /// Create a new project
    pub async fn create(db: &DatabaseConnection, input: &CreateProject) -> AppResult<Project> {
        let model = ActiveModel {
            name: Set(input.name.clone()),
            client_name: Set(input.client_name.clone()),
            description: Set(input.description.clone()),
            image_url: Set(input.image_url.clone()),
            completion_date: Set(input.completion_date),
            created_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// Replace every editable field of a project
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateProject,
    ) -> AppResult<Project> {
        let model = ProjectEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Project".to_string()))?;

        let mut active: ActiveModel = model.into();
        active.name = Set(input.name.clone());
        active.client_name = Set(input.client_name.clone());
        active.description = Set(input.description.clone());
        active.image_url = Set(input.image_url.clone());
        active.completion_date = Set(input.completion_date);

        let result = active.update(db).await?;
        Ok(result.into())
    }

    /// Projects that reference an image at all
    pub async fn list_with_images(db: &DatabaseConnection) -> AppResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .filter(Column::ImageUrl.is_not_null())
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Rewrite only the stored image URL
    pub async fn set_image_url(
        db: &DatabaseConnection,
        id: i32,
        image_url: Option<String>,
    ) -> AppResult<()> {
        let active = ActiveModel {
            id: Set(id),
            image_url: Set(image_url),
            ..Default::default()
        };
        active.update(db).await?;
        Ok(())
    }
}

// Conversion from SeaORM model to our domain model
impl From<project::Model> for Project {
    fn from(m: project::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            client_name: m.client_name,
            description: m.description,
            image_url: m.image_url,
            completion_date: m.completion_date,
            created_at: m.created_at,
        }
    }
}
