use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entity::service_request::{self, ActiveModel, Column, Entity as RequestEntity};
use crate::error::{AppError, AppResult};
use crate::models::{CreateServiceRequest, RequestStatus, ServiceRequest};
use crate::repositories::Repository;

/// Service request repository for database operations
pub struct ServiceRequestRepository;

#[async_trait]
impl Repository<ServiceRequest> for ServiceRequestRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<ServiceRequest> {
        let model = RequestEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Service request".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = RequestEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Service request".to_string()));
        }

        Ok(())
    }

    async fn list(db: &DatabaseConnection, limit: Option<u64>) -> AppResult<Vec<ServiceRequest>> {
        let models = RequestEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = RequestEntity::find().count(db).await?;
        Ok(count)
    }
}

impl ServiceRequestRepository {
    /// Store a new booking; always starts pending
    pub async fn create(
        db: &DatabaseConnection,
        input: &CreateServiceRequest,
    ) -> AppResult<ServiceRequest> {
        let model = ActiveModel {
            service_id: Set(input.service_id),
            service_name: Set(input.service_name.clone()),
            customer_name: Set(input.customer_name.clone()),
            customer_email: Set(input.customer_email.clone()),
            customer_phone: Set(input.customer_phone.clone()),
            details: Set(input.details.clone()),
            preferred_date: Set(input.preferred_date),
            preferred_time: Set(input.preferred_time.clone()),
            status: Set(RequestStatus::Pending),
            created_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    pub async fn update_status(
        db: &DatabaseConnection,
        id: i32,
        status: RequestStatus,
    ) -> AppResult<ServiceRequest> {
        let model = RequestEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Service request".to_string()))?;

        let mut active: ActiveModel = model.into();
        active.status = Set(status);

        let result = active.update(db).await?;
        Ok(result.into())
    }

    /// Delete every request, returning how many were removed
    pub async fn delete_all(db: &DatabaseConnection) -> AppResult<u64> {
        let result = RequestEntity::delete_many().exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_by_status(db: &DatabaseConnection, status: RequestStatus) -> AppResult<u64> {
        let count = RequestEntity::find()
            .filter(Column::Status.eq(status))
            .count(db)
            .await?;

        Ok(count)
    }
}

// Conversion from SeaORM model to our domain model
impl From<service_request::Model> for ServiceRequest {
    fn from(m: service_request::Model) -> Self {
        Self {
            id: m.id,
            service_id: m.service_id,
            service_name: m.service_name,
            customer_name: m.customer_name,
            customer_email: m.customer_email,
            customer_phone: m.customer_phone,
            details: m.details,
            preferred_date: m.preferred_date,
            preferred_time: m.preferred_time,
            status: m.status,
            created_at: m.created_at,
        }
    }
}
