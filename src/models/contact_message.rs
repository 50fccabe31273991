use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Subject line for a contact message, derived from the optional service field
pub fn contact_subject(service: Option<&str>) -> String {
    match service.map(str::trim).filter(|s| !s.is_empty()) {
        Some(service) => format!("Inquiry about {}", service),
        None => "General Inquiry".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_subject() {
        assert_eq!(contact_subject(None), "General Inquiry");
        assert_eq!(contact_subject(Some("   ")), "General Inquiry");
        assert_eq!(
            contact_subject(Some("Fire Alarm Installation")),
            "Inquiry about Fire Alarm Installation"
        );
    }
}
