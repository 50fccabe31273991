pub use super::contact_message::Entity as ContactMessage;
pub use super::project::Entity as Project;
pub use super::service_request::Entity as ServiceRequest;
pub use super::user::Entity as User;
