// Library crate for the Redline site API
// Exports modules for use by the binaries and tests

pub mod client;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::handlers::{
    create_project, create_user, delete_all_messages, delete_all_service_requests,
    delete_message, delete_project, delete_service_request, delete_user, get_project, get_stats,
    list_messages, list_projects, list_service_requests, list_users, login, mark_message_read,
    me, route_not_found, submit_contact, submit_service_request, update_project,
    update_request_status, update_user, upload_project_image,
};
use crate::middlewares::auth_middleware;
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // Admin routes (require a valid bearer token)
    let protected_routes = Router::new()
        .route("/api/admin/me", get(me))
        .route("/api/admin/stats", get(get_stats))
        // Project management
        .route("/api/projects", post(create_project))
        .route("/api/projects/{id}", put(update_project))
        .route("/api/projects/{id}", delete(delete_project))
        // Contact messages
        .route("/api/admin/messages", get(list_messages))
        .route("/api/admin/messages/all", delete(delete_all_messages))
        .route("/api/admin/messages/{id}", delete(delete_message))
        .route("/api/admin/messages/{id}/read", put(mark_message_read))
        // Service requests
        .route("/api/admin/service-requests", get(list_service_requests))
        .route(
            "/api/admin/service-requests/all",
            delete(delete_all_service_requests),
        )
        .route(
            "/api/admin/service-requests/{id}",
            delete(delete_service_request),
        )
        .route(
            "/api/admin/service-requests/{id}/status",
            put(update_request_status),
        )
        // Admin accounts
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users", post(create_user))
        .route("/api/admin/users/{id}", put(update_user))
        .route("/api/admin/users/{id}", delete(delete_user))
        // Uploads
        .route(
            "/api/upload/project-image",
            post(upload_project_image)
                .layer(DefaultBodyLimit::max(state.config.max_upload_bytes)),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let uploads = ServeDir::new(state.uploads.root());

    Router::new()
        // Public site routes
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{id}", get(get_project))
        .route("/api/contact", post(submit_contact))
        .route("/api/service-requests", post(submit_service_request))
        .route("/api/admin/login", post(login))
        // Protected routes
        .merge(protected_routes)
        // Uploaded images
        .nest_service("/api/uploads", uploads)
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// CORS open to every origin
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

/// Turn a handler panic into the usual 500 JSON body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
