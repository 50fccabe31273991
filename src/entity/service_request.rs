use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::RequestStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Catalog id of the booked service, when the form knows it
    pub service_id: Option<i32>,
    pub service_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub preferred_date: Option<TimeDate>,
    pub preferred_time: Option<String>,
    pub status: RequestStatus,
    pub created_at: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
