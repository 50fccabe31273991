use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use utoipa::ToSchema;

/// A portfolio entry describing a completed client engagement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub client_name: String,
    pub description: String,
    pub image_url: Option<String>,
    #[serde(with = "crate::models::dates::option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub completion_date: Option<Date>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

/// Validated input for creating a project
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub client_name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub completion_date: Option<Date>,
}

/// Full replacement of a project's editable fields
#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub name: String,
    pub client_name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub completion_date: Option<Date>,
}
