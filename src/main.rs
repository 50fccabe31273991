use anyhow::Context;
use tokio::signal;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use redline_site::config::{Config, LogFormat};
use redline_site::handlers::{
    ContactRequest, CreateUserRequest, CreatedResponse, DeleteAllResponse, LoginRequest,
    LoginResponse, MessageResponse, ProjectRequest, ServiceRequestRequest, UpdateStatusRequest,
    UpdateUserRequest, UploadResponse,
};
use redline_site::models::{
    AdminStats, ContactMessage, Project, RequestStatus, ServiceRequest, UserResponse, UserSummary,
};
use redline_site::state::AppState;
use redline_site::{build_router, handlers};

/// Security scheme for Bearer token
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::project::create_project,
        handlers::project::update_project,
        handlers::project::delete_project,
        handlers::contact::submit_contact,
        handlers::service_request::submit_service_request,
        handlers::service_request::list_service_requests,
        handlers::service_request::update_request_status,
        handlers::service_request::delete_service_request,
        handlers::service_request::delete_all_service_requests,
        handlers::auth::login,
        handlers::auth::me,
        handlers::stats::get_stats,
        handlers::message::list_messages,
        handlers::message::mark_message_read,
        handlers::message::delete_message,
        handlers::message::delete_all_messages,
        handlers::user::list_users,
        handlers::user::create_user,
        handlers::user::update_user,
        handlers::user::delete_user,
        handlers::upload::upload_project_image,
    ),
    components(schemas(
        Project,
        ProjectRequest,
        ContactMessage,
        ContactRequest,
        ServiceRequest,
        ServiceRequestRequest,
        RequestStatus,
        UpdateStatusRequest,
        LoginRequest,
        LoginResponse,
        UserSummary,
        UserResponse,
        CreateUserRequest,
        UpdateUserRequest,
        AdminStats,
        UploadResponse,
        CreatedResponse,
        MessageResponse,
        DeleteAllResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Public", description = "Public site forms"),
        (name = "Projects", description = "Portfolio projects"),
        (name = "Auth", description = "Admin authentication"),
        (name = "Admin", description = "Dashboard counters"),
        (name = "Messages", description = "Contact message inbox"),
        (name = "Service Requests", description = "Service booking inbox"),
        (name = "Users", description = "Admin account management"),
        (name = "Uploads", description = "Project image uploads")
    )
)]
struct ApiDoc;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "redline_site=info,tower_http=info".into());

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);
    let addr = config.server_addr();

    // Connect, create tables, seed the bootstrap admin
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;
    tracing::info!("Database ready");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
