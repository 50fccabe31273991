//! Typed client for the site API.
//!
//! [`SiteClient`] covers what the public pages need. [`AdminClient`] is what
//! the back-office screens are built on: every screen is a listing fetched on
//! demand, every mutation hands back the re-fetched listing, and destructive
//! actions only fire once confirmed.

pub mod admin;
pub mod site;

pub use admin::{AdminClient, AdminForm, Destructive, ImageUpload, Listing, PendingAction, ProjectForm};
pub use site::{BookingForm, ContactForm, ProjectView, SiteClient};

use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("The last admin account cannot be deleted")]
    LastAccount,
}

impl ClientError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Error body produced by the server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    details: Option<String>,
}

/// `{ "id": .. }` part of a 201 response
#[derive(Debug, Deserialize)]
struct Created {
    id: i32,
}

/// Decode a success body, or turn the error body into [`ClientError::Api`]
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            error,
            details: Some(details),
        }) => format!("{}: {}", error, details),
        Ok(ErrorBody { error, .. }) => error,
        Err(_) => status.canonical_reason().unwrap_or("Request failed").to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Check the status and discard the body
async fn expect_success(response: reqwest::Response) -> ClientResult<()> {
    decode::<serde_json::Value>(response).await.map(|_| ())
}
