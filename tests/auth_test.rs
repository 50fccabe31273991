mod common;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use sea_orm::ConnectionTrait;
use serde_json::json;

use common::{test_config, Factory, TestApp, TEST_PASSWORD};
use redline_site::services::AuthService;

#[tokio::test]
async fn test_login_with_email() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .post("/api/admin/login")
        .json(&json!({
            "email": &auth.email,
            "password": TEST_PASSWORD
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["id"], auth.user_id);
    assert_eq!(body["user"]["email"], auth.email.as_str());
    assert_eq!(body["user"]["name"], auth.username.as_str());
    assert_eq!(body["user"]["role"], 1);
}

#[tokio::test]
async fn test_login_with_username() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .post("/api/admin/login")
        .json(&json!({
            "username": &auth.username,
            "password": TEST_PASSWORD
        }))
        .await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .post("/api/admin/login")
        .json(&json!({
            "email": &auth.email,
            "password": "wrongpassword"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_none());
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_account() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/admin/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let mut fastest_unknown = Duration::MAX;
    let mut fastest_wrong_password = Duration::MAX;
    let mut bodies = Vec::new();

    for _ in 0..3 {
        for (login, is_unknown) in [("nobody@example.com", true), (auth.email.as_str(), false)] {
            let started = Instant::now();
            let response = app
                .server
                .post("/api/admin/login")
                .json(&json!({ "email": login, "password": "wrongpassword" }))
                .await;
            let elapsed = started.elapsed();

            response.assert_status(StatusCode::UNAUTHORIZED);
            bodies.push(response.text());

            if is_unknown {
                fastest_unknown = fastest_unknown.min(elapsed);
            } else {
                fastest_wrong_password = fastest_wrong_password.min(elapsed);
            }
        }
    }

    bodies.dedup();
    assert_eq!(bodies.len(), 1);

    // Both paths pay for an argon2 verification
    assert!(
        fastest_unknown * 4 >= fastest_wrong_password,
        "unknown={:?} wrong_password={:?}",
        fastest_unknown,
        fastest_wrong_password
    );
}

#[tokio::test]
async fn test_login_database_failure_is_not_reported_as_bad_credentials() {
    let app = TestApp::new().await;
    app.state
        .db
        .execute_unprepared("DROP TABLE users")
        .await
        .unwrap();

    let response = app
        .server
        .post("/api/admin/login")
        .json(&json!({
            "email": "admin@example.com",
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Database error");
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/admin/login")
        .json(&json!({ "email": "admin@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bootstrap_admin_seeded_and_can_log_in() {
    let mut config = test_config();
    config.bootstrap_admin_password = Some("bootstrap-secret".to_string());
    let app = TestApp::with_config(config).await;

    let response = app
        .server
        .post("/api/admin/login")
        .json(&json!({
            "username": "Webmaster",
            "password": "bootstrap-secret"
        }))
        .await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .get("/api/admin/me")
        .add_header("Authorization", auth.auth_header())
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["username"], auth.username.as_str());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_me_no_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/admin/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_invalid_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/api/admin/me")
        .add_header("Authorization", "Bearer invalid-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_me_expired_token() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let mut config = app.state.config.clone();
    config.jwt_expiration_hours = -1;
    let token = AuthService::generate_token(auth.user_id, &auth.username, &config).unwrap();

    let response = app
        .server
        .get("/api/admin/me")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = TestApp::new().await;

    for path in [
        "/api/admin/stats",
        "/api/admin/messages",
        "/api/admin/service-requests",
        "/api/admin/users",
    ] {
        app.server
            .get(path)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
