pub mod contact_message;
pub mod dates;
pub mod project;
pub mod service_request;
pub mod stats;
pub mod user;

pub use contact_message::*;
pub use project::*;
pub use service_request::*;
pub use stats::*;
pub use user::*;
