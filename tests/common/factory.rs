use time::macros::date;
use uuid::Uuid;

use redline_site::models::{
    contact_subject, ContactMessage, CreateContactMessage, CreateProject, CreateServiceRequest,
    CreateUser, Project, ServiceRequest, User, BOOTSTRAP_USERNAME,
};
use redline_site::repositories::{
    ContactMessageRepository, ProjectRepository, ServiceRequestRepository, UserRepository,
};
use redline_site::services::AuthService;
use redline_site::state::AppState;

/// Password given to every factory-made account
pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Authentication info for tests
pub struct TestAuth {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub token: String,
}

impl TestAuth {
    /// Get the Authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create an admin account and return auth info
    pub async fn create_admin(&self) -> TestAuth {
        let suffix = &Uuid::new_v4().simple().to_string()[..8];
        let user = self
            .create_user_with(&format!("admin-{}", suffix), TEST_PASSWORD)
            .await;

        let token = AuthService::generate_token(user.id, &user.username, &self.state.config)
            .unwrap();

        TestAuth {
            user_id: user.id,
            username: user.username,
            email: user.email,
            token,
        }
    }

    /// Create an account with a specific username and password
    pub async fn create_user_with(&self, username: &str, password: &str) -> User {
        let input = CreateUser {
            username: username.to_string(),
            email: format!("{}@example.com", username.to_lowercase()),
            role_id: 1,
        };

        let password_hash = AuthService::hash_password(password).unwrap();
        UserRepository::create(&self.state.db, &input, &password_hash)
            .await
            .unwrap()
    }

    /// Create the hidden bootstrap account
    pub async fn create_bootstrap_user(&self) -> User {
        self.create_user_with(BOOTSTRAP_USERNAME, TEST_PASSWORD).await
    }

    /// Create a project with the given stored image URL
    pub async fn create_project_with_image(&self, image_url: Option<&str>) -> Project {
        let input = CreateProject {
            name: format!("Project {}", Uuid::new_v4()),
            client_name: "Kigali Heights".to_string(),
            description: "Network cabling and CCTV".to_string(),
            image_url: image_url.map(str::to_string),
            completion_date: Some(date!(2024 - 03 - 15)),
        };

        ProjectRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }

    pub async fn create_project(&self) -> Project {
        self.create_project_with_image(Some("https://cdn.example.com/site.jpg"))
            .await
    }

    /// Create a contact message
    pub async fn create_message(&self) -> ContactMessage {
        let input = CreateContactMessage {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "0788000000".to_string(),
            subject: contact_subject(None),
            message: "Hi there".to_string(),
        };

        ContactMessageRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }

    /// Create a pending service request
    pub async fn create_service_request(&self) -> ServiceRequest {
        let input = CreateServiceRequest {
            service_id: Some(3),
            service_name: "Solar installation".to_string(),
            customer_name: "Jean".to_string(),
            customer_email: "jean@example.com".to_string(),
            customer_phone: "0788111111".to_string(),
            details: "Rooftop panels for a small office".to_string(),
            preferred_date: Some(date!(2025 - 01 - 10)),
            preferred_time: Some("10:00".to_string()),
        };

        ServiceRequestRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }
}
