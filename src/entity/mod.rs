pub mod contact_message;
pub mod project;
pub mod service_request;
pub mod user;

pub mod prelude;

pub use prelude::*;
