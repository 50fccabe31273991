mod common;

use axum::http::StatusCode;

use common::{Factory, TestApp};

#[tokio::test]
async fn test_unknown_path() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Endpoint not found: /nope");
}

#[tokio::test]
async fn test_unknown_method_on_known_path() {
    let app = TestApp::new().await;

    let response = app.server.patch("/api/projects").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Endpoint not found: /projects");
}

#[tokio::test]
async fn test_non_numeric_id_is_unknown_endpoint() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/projects/abc").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Endpoint not found: /projects/abc");
}

#[tokio::test]
async fn test_literal_segment_wins_over_id() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let auth = factory.create_admin().await;
    factory.create_message().await;

    let response = app
        .server
        .delete("/api/admin/messages/all")
        .add_header("Authorization", auth.auth_header())
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], 1);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = TestApp::new().await;

    let response = app
        .server
        .method(axum::http::Method::OPTIONS, "/api/contact")
        .add_header("Origin", "https://redlinesolution.rw")
        .add_header("Access-Control-Request-Method", "POST")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
