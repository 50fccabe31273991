use axum_test::TestServer;
use redline_site::build_router;
use redline_site::config::{Config, LogFormat};
use redline_site::state::AppState;
use uuid::Uuid;

/// Test configuration: private in-memory database and upload directory
pub fn test_config() -> Config {
    Config {
        // A single kept-alive connection keeps the in-memory database alive
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        jwt_secret: "test-jwt-secret-that-is-at-least-32-characters-long".to_string(),
        jwt_expiration_hours: 24,
        upload_dir: std::env::temp_dir().join(format!("redline-test-{}", Uuid::new_v4())),
        max_upload_bytes: 1024 * 1024,
        bootstrap_admin_email: "webmaster@localhost".to_string(),
        bootstrap_admin_password: None,
        host: "127.0.0.1".to_string(),
        port: 0,
        log_format: LogFormat::Pretty,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: Config) -> Self {
        let state = AppState::new(config)
            .await
            .expect("Failed to create test app state");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}

/// Serve the router on an ephemeral local port and return its base URL
pub async fn spawn_server() -> (String, AppState) {
    let state = AppState::new(test_config())
        .await
        .expect("Failed to create test app state");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    let router = build_router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });

    (format!("http://{}", addr), state)
}
