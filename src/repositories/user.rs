use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entity::user::{self, ActiveModel, Column, Entity as UserEntity};
use crate::error::{AppError, AppResult};
use crate::models::{CreateUser, UpdateUser, User, BOOTSTRAP_USERNAME};
use crate::repositories::Repository;

/// User repository for database operations
pub struct UserRepository;

// Implement the base Repository trait
#[async_trait]
impl Repository<User> for UserRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("User".to_string()));
        }

        Ok(())
    }

    /// Lists admin accounts, hiding the bootstrap account
    async fn list(db: &DatabaseConnection, limit: Option<u64>) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(Column::Username.ne(BOOTSTRAP_USERNAME))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = UserEntity::find()
            .filter(Column::Username.ne(BOOTSTRAP_USERNAME))
            .count(db)
            .await?;
        Ok(count)
    }
}

// User-specific methods (not in the base trait)
impl UserRepository {
    /// Create a new user
    pub async fn create(
        db: &DatabaseConnection,
        input: &CreateUser,
        password_hash: &str,
    ) -> AppResult<User> {
        let model = ActiveModel {
            username: Set(input.username.clone()),
            email: Set(input.email.clone()),
            password_hash: Set(password_hash.to_string()),
            role_id: Set(input.role_id),
            created_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await.map_err(username_conflict)?;
        Ok(result.into())
    }

    /// Find user by email or username (for login)
    pub async fn find_by_login(db: &DatabaseConnection, login: &str) -> AppResult<User> {
        let model = UserEntity::find()
            .filter(
                Condition::any()
                    .add(Column::Email.eq(login))
                    .add(Column::Username.eq(login)),
            )
            .order_by_asc(Column::Id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        Ok(model.into())
    }

    /// Check if a username is taken
    pub async fn username_exists(db: &DatabaseConnection, username: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(Column::Username.eq(username))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    /// Update user; the password hash changes only when one is supplied
    pub async fn update(db: &DatabaseConnection, id: i32, input: &UpdateUser) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        let mut active: ActiveModel = model.into();
        active.username = Set(input.username.clone());
        active.email = Set(input.email.clone());
        if let Some(role_id) = input.role_id {
            active.role_id = Set(role_id);
        }
        if let Some(password_hash) = &input.password_hash {
            active.password_hash = Set(password_hash.clone());
        }

        let result = active.update(db).await.map_err(username_conflict)?;
        Ok(result.into())
    }
}

fn username_conflict(err: sea_orm::DbErr) -> AppError {
    match AppError::from(err) {
        AppError::Conflict(_) => AppError::Conflict("Username".to_string()),
        other => other,
    }
}

// Conversion from SeaORM model to our domain model
impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            password_hash: m.password_hash,
            role_id: m.role_id,
            created_at: m.created_at,
        }
    }
}
