use serde::Serialize;

use crate::client::{decode, AdminClient, ClientResult, Created};
use crate::handlers::LoginResponse;
use crate::models::Project;
use crate::services::image_url;

/// Project plus the image URL a browser can load directly
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    pub project: Project,
    pub image_src: Option<String>,
}

/// Public contact form
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

/// Public service booking form
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingForm {
    pub service_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the public endpoints
#[derive(Debug, Clone)]
pub struct SiteClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
}

impl SiteClient {
    /// `base_url` is the site origin, e.g. `https://redlinesolution.rw`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an API path (`/projects` → `{base}/api/projects`)
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub(crate) fn view(&self, project: Project) -> ProjectView {
        let image_src = image_url::normalize(project.image_url.as_deref(), &self.base_url);
        ProjectView { project, image_src }
    }

    pub async fn list_projects(&self) -> ClientResult<Vec<ProjectView>> {
        let response = self.http.get(self.url("/projects")).send().await?;
        let projects: Vec<Project> = decode(response).await?;
        Ok(projects.into_iter().map(|p| self.view(p)).collect())
    }

    pub async fn get_project(&self, id: i32) -> ClientResult<ProjectView> {
        let response = self
            .http
            .get(self.url(&format!("/projects/{}", id)))
            .send()
            .await?;
        let project: Project = decode(response).await?;
        Ok(self.view(project))
    }

    /// Submit the contact form, returning the new message id
    pub async fn submit_contact(&self, form: &ContactForm) -> ClientResult<i32> {
        let response = self.http.post(self.url("/contact")).json(form).send().await?;
        let created: Created = decode(response).await?;
        Ok(created.id)
    }

    /// Submit the booking form, returning the new request id
    pub async fn submit_service_request(&self, form: &BookingForm) -> ClientResult<i32> {
        let response = self
            .http
            .post(self.url("/service-requests"))
            .json(form)
            .send()
            .await?;
        let created: Created = decode(response).await?;
        Ok(created.id)
    }

    /// Log in and get a client for the admin endpoints
    pub async fn login(&self, login: &str, password: &str) -> ClientResult<AdminClient> {
        let response = self
            .http
            .post(self.url("/admin/login"))
            .json(&Credentials {
                email: login,
                password,
            })
            .send()
            .await?;
        let body: LoginResponse = decode(response).await?;
        Ok(AdminClient::new(self.clone(), body.token, body.user))
    }
}
