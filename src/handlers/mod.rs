pub mod auth;
pub mod common;
pub mod contact;
pub mod message;
pub mod project;
pub mod service_request;
pub mod stats;
pub mod upload;
pub mod user;

pub use auth::{login, me, LoginRequest, LoginResponse};
pub use common::{
    route_not_found, validate_optional, validate_required, ApiJson, CreatedResponse,
    DeleteAllResponse, MessageResponse, RecordId,
};
pub use contact::{submit_contact, ContactRequest};
pub use message::{delete_all_messages, delete_message, list_messages, mark_message_read};
pub use project::{
    create_project, delete_project, get_project, list_projects, update_project, ProjectRequest,
};
pub use service_request::{
    delete_all_service_requests, delete_service_request, list_service_requests,
    submit_service_request, update_request_status, ServiceRequestRequest, UpdateStatusRequest,
};
pub use stats::get_stats;
pub use upload::{upload_project_image, UploadResponse};
pub use user::{
    create_user, delete_user, list_users, update_user, CreateUserRequest, UpdateUserRequest,
};
