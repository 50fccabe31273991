use std::fmt;
use std::str::FromStr;

use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use utoipa::ToSchema;

/// Lifecycle of a service request: pending until an admin completes it
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "completed" => Ok(RequestStatus::Completed),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// A public booking submission for a named service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceRequest {
    pub id: i32,
    pub service_id: Option<i32>,
    pub service_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub details: String,
    #[serde(with = "crate::models::dates::option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub preferred_date: Option<Date>,
    pub preferred_time: Option<String>,
    pub status: RequestStatus,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct CreateServiceRequest {
    pub service_id: Option<i32>,
    pub service_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub details: String,
    pub preferred_date: Option<Date>,
    pub preferred_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("pending".parse::<RequestStatus>(), Ok(RequestStatus::Pending));
        assert_eq!(" Completed ".parse::<RequestStatus>(), Ok(RequestStatus::Completed));
        assert!("archived".parse::<RequestStatus>().is_err());
        assert_eq!(RequestStatus::Completed.to_string(), "completed");
    }
}
