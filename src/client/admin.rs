use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use crate::client::{decode, expect_success, ClientError, ClientResult, ProjectView, SiteClient};
use crate::handlers::upload::IMAGE_FIELD;
use crate::handlers::UploadResponse;
use crate::models::{
    AdminStats, ContactMessage, RequestStatus, ServiceRequest, UserResponse, UserSummary,
};

/// Project editor fields. `image_url` is replaced by the uploaded file's URL
/// when an image accompanies the save.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectForm {
    pub name: String,
    pub client_name: String,
    pub description: String,
    pub image_url: String,
    pub completion_date: String,
}

/// Image picked in the project editor
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Account editor fields
#[derive(Debug, Clone, Default)]
pub struct AdminForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role_id: Option<i32>,
}

#[derive(Debug, Serialize)]
struct AdminBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_id: Option<i32>,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: RequestStatus,
}

/// Freshly re-fetched screen contents
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Messages(Vec<ContactMessage>),
    ServiceRequests(Vec<ServiceRequest>),
    Projects(Vec<ProjectView>),
    Users(Vec<UserResponse>),
}

/// Operations that need an explicit confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destructive {
    Message(i32),
    AllMessages,
    ServiceRequest(i32),
    AllServiceRequests,
    Project(i32),
    User(i32),
}

impl Destructive {
    fn path(self) -> String {
        match self {
            Destructive::Message(id) => format!("/admin/messages/{}", id),
            Destructive::AllMessages => "/admin/messages/all".to_string(),
            Destructive::ServiceRequest(id) => format!("/admin/service-requests/{}", id),
            Destructive::AllServiceRequests => "/admin/service-requests/all".to_string(),
            Destructive::Project(id) => format!("/projects/{}", id),
            Destructive::User(id) => format!("/admin/users/{}", id),
        }
    }

    /// Question shown before the action runs
    pub fn prompt(self) -> &'static str {
        match self {
            Destructive::Message(_) => "Delete this message?",
            Destructive::AllMessages => "Delete ALL messages? This cannot be undone.",
            Destructive::ServiceRequest(_) => "Delete this service request?",
            Destructive::AllServiceRequests => {
                "Delete ALL service requests? This cannot be undone."
            }
            Destructive::Project(_) => "Delete this project?",
            Destructive::User(_) => "Delete this user?",
        }
    }
}

/// A destructive action waiting for the user's answer. Nothing is sent until
/// [`PendingAction::confirm`]; dropping it or calling
/// [`PendingAction::cancel`] leaves the data untouched.
#[derive(Debug)]
#[must_use = "the action only runs once confirmed"]
pub struct PendingAction<'a> {
    client: &'a AdminClient,
    action: Destructive,
}

impl PendingAction<'_> {
    pub fn action(&self) -> Destructive {
        self.action
    }

    pub fn prompt(&self) -> &'static str {
        self.action.prompt()
    }

    /// Run the action and return the affected screen, re-fetched
    pub async fn confirm(self) -> ClientResult<Listing> {
        let response = self
            .client
            .request(Method::DELETE, &self.action.path())
            .send()
            .await?;
        expect_success(response).await?;

        tracing::debug!(action = ?self.action, "Confirmed destructive action");

        match self.action {
            Destructive::Message(_) | Destructive::AllMessages => {
                self.client.messages().await.map(Listing::Messages)
            }
            Destructive::ServiceRequest(_) | Destructive::AllServiceRequests => self
                .client
                .service_requests()
                .await
                .map(Listing::ServiceRequests),
            Destructive::Project(_) => self.client.projects().await.map(Listing::Projects),
            Destructive::User(_) => self.client.users().await.map(Listing::Users),
        }
    }

    pub fn cancel(self) {}
}

/// Authenticated client for the admin console. The token lives only in this
/// value; dropping it is logging out.
#[derive(Debug, Clone)]
pub struct AdminClient {
    site: SiteClient,
    token: String,
    user: UserSummary,
}

impl AdminClient {
    pub(crate) fn new(site: SiteClient, token: String, user: UserSummary) -> Self {
        Self { site, token, user }
    }

    /// Account that logged in
    pub fn user(&self) -> &UserSummary {
        &self.user
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn site(&self) -> &SiteClient {
        &self.site
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.site
            .http
            .request(method, self.site.url(path))
            .bearer_auth(&self.token)
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        decode(response).await
    }

    // ============ Dashboard ============

    pub async fn me(&self) -> ClientResult<UserResponse> {
        self.fetch("/admin/me").await
    }

    pub async fn stats(&self) -> ClientResult<AdminStats> {
        self.fetch("/admin/stats").await
    }

    // ============ Messages ============

    pub async fn messages(&self) -> ClientResult<Vec<ContactMessage>> {
        self.fetch("/admin/messages").await
    }

    pub async fn mark_read(&self, id: i32) -> ClientResult<Vec<ContactMessage>> {
        let response = self
            .request(Method::PUT, &format!("/admin/messages/{}/read", id))
            .send()
            .await?;
        expect_success(response).await?;
        self.messages().await
    }

    pub fn delete_message(&self, id: i32) -> PendingAction<'_> {
        self.pending(Destructive::Message(id))
    }

    pub fn delete_all_messages(&self) -> PendingAction<'_> {
        self.pending(Destructive::AllMessages)
    }

    // ============ Service requests ============

    pub async fn service_requests(&self) -> ClientResult<Vec<ServiceRequest>> {
        self.fetch("/admin/service-requests").await
    }

    pub async fn set_request_status(
        &self,
        id: i32,
        status: RequestStatus,
    ) -> ClientResult<Vec<ServiceRequest>> {
        let response = self
            .request(Method::PUT, &format!("/admin/service-requests/{}/status", id))
            .json(&StatusBody { status })
            .send()
            .await?;
        expect_success(response).await?;
        self.service_requests().await
    }

    pub fn delete_service_request(&self, id: i32) -> PendingAction<'_> {
        self.pending(Destructive::ServiceRequest(id))
    }

    pub fn delete_all_service_requests(&self) -> PendingAction<'_> {
        self.pending(Destructive::AllServiceRequests)
    }

    // ============ Projects ============

    pub async fn projects(&self) -> ClientResult<Vec<ProjectView>> {
        self.site.list_projects().await
    }

    /// Upload an image and return the path to store in `image_url`
    pub async fn upload_image(&self, image: ImageUpload) -> ClientResult<String> {
        let part = Part::bytes(image.bytes).file_name(image.file_name);
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .request(Method::POST, "/upload/project-image")
            .multipart(form)
            .send()
            .await?;
        let body: UploadResponse = decode(response).await?;
        Ok(body.image_url)
    }

    /// Create a project, uploading its image first when one is given
    pub async fn create_project(
        &self,
        form: ProjectForm,
        image: Option<ImageUpload>,
    ) -> ClientResult<Vec<ProjectView>> {
        self.save_project(Method::POST, "/projects".to_string(), form, image)
            .await
    }

    pub async fn update_project(
        &self,
        id: i32,
        form: ProjectForm,
        image: Option<ImageUpload>,
    ) -> ClientResult<Vec<ProjectView>> {
        self.save_project(Method::PUT, format!("/projects/{}", id), form, image)
            .await
    }

    async fn save_project(
        &self,
        method: Method,
        path: String,
        mut form: ProjectForm,
        image: Option<ImageUpload>,
    ) -> ClientResult<Vec<ProjectView>> {
        if let Some(image) = image {
            form.image_url = self.upload_image(image).await?;
        }

        let response = self.request(method, &path).json(&form).send().await?;
        expect_success(response).await?;
        self.projects().await
    }

    pub fn delete_project(&self, id: i32) -> PendingAction<'_> {
        self.pending(Destructive::Project(id))
    }

    // ============ Users ============

    pub async fn users(&self) -> ClientResult<Vec<UserResponse>> {
        self.fetch("/admin/users").await
    }

    pub async fn create_user(&self, form: &AdminForm) -> ClientResult<Vec<UserResponse>> {
        if form.password != form.confirm_password {
            return Err(ClientError::PasswordMismatch);
        }

        let response = self
            .request(Method::POST, "/admin/users")
            .json(&form.body())
            .send()
            .await?;
        expect_success(response).await?;
        self.users().await
    }

    /// Update an account. A blank password keeps the current one.
    pub async fn update_user(&self, id: i32, form: &AdminForm) -> ClientResult<Vec<UserResponse>> {
        if !form.password.is_empty() && form.password != form.confirm_password {
            return Err(ClientError::PasswordMismatch);
        }

        let response = self
            .request(Method::PUT, &format!("/admin/users/{}", id))
            .json(&form.body())
            .send()
            .await?;
        expect_success(response).await?;
        self.users().await
    }

    /// Ask to delete an account. Refused outright when it is the only one listed.
    pub async fn delete_user(&self, id: i32) -> ClientResult<PendingAction<'_>> {
        if self.users().await?.len() <= 1 {
            return Err(ClientError::LastAccount);
        }
        Ok(self.pending(Destructive::User(id)))
    }

    fn pending(&self, action: Destructive) -> PendingAction<'_> {
        PendingAction {
            client: self,
            action,
        }
    }
}

impl AdminForm {
    fn body(&self) -> AdminBody<'_> {
        AdminBody {
            username: &self.username,
            email: &self.email,
            password: &self.password,
            role_id: self.role_id,
        }
    }
}
