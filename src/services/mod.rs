pub mod auth;
pub mod image_url;
pub mod stats;
pub mod uploads;

pub use auth::{AuthService, Claims, MIN_PASSWORD_LEN};
pub use stats::StatsService;
pub use uploads::UploadStore;
