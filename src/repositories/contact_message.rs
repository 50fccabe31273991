use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entity::contact_message::{self, ActiveModel, Column, Entity as MessageEntity};
use crate::error::{AppError, AppResult};
use crate::models::{ContactMessage, CreateContactMessage};
use crate::repositories::Repository;

/// Contact message repository for database operations
pub struct ContactMessageRepository;

#[async_trait]
impl Repository<ContactMessage> for ContactMessageRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<ContactMessage> {
        let model = MessageEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Message".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = MessageEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Message".to_string()));
        }

        Ok(())
    }

    async fn list(db: &DatabaseConnection, limit: Option<u64>) -> AppResult<Vec<ContactMessage>> {
        let models = MessageEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = MessageEntity::find().count(db).await?;
        Ok(count)
    }
}

impl ContactMessageRepository {
    /// Store a new, unread message
    pub async fn create(
        db: &DatabaseConnection,
        input: &CreateContactMessage,
    ) -> AppResult<ContactMessage> {
        let model = ActiveModel {
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            phone: Set(input.phone.clone()),
            subject: Set(input.subject.clone()),
            message: Set(input.message.clone()),
            is_read: Set(false),
            created_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// Flag a message as read; repeated calls leave it read
    pub async fn mark_read(db: &DatabaseConnection, id: i32) -> AppResult<ContactMessage> {
        let model = MessageEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Message".to_string()))?;

        if model.is_read {
            return Ok(model.into());
        }

        let mut active: ActiveModel = model.into();
        active.is_read = Set(true);

        let result = active.update(db).await?;
        Ok(result.into())
    }

    /// Delete every message, returning how many were removed
    pub async fn delete_all(db: &DatabaseConnection) -> AppResult<u64> {
        let result = MessageEntity::delete_many().exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_unread(db: &DatabaseConnection) -> AppResult<u64> {
        let count = MessageEntity::find()
            .filter(Column::IsRead.eq(false))
            .count(db)
            .await?;

        Ok(count)
    }
}

// Conversion from SeaORM model to our domain model
impl From<contact_message::Model> for ContactMessage {
    fn from(m: contact_message::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            subject: m.subject,
            message: m.message,
            is_read: m.is_read,
            created_at: m.created_at,
        }
    }
}
