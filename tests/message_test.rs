mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{Factory, TestApp};

#[tokio::test]
async fn test_submit_contact_then_list() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .post("/api/contact")
        .json(&json!({
            "name": "Ana",
            "email": "a@x.rw",
            "phone": "",
            "message": "Hi"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Message sent successfully!");

    let messages: Vec<serde_json::Value> = app
        .server
        .get("/api/admin/messages")
        .add_header("Authorization", auth.auth_header())
        .await
        .json();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["id"], body["id"]);
    assert_eq!(messages[0]["name"], "Ana");
    assert_eq!(messages[0]["subject"], "General Inquiry");
    assert_eq!(messages[0]["is_read"], false);
}

#[tokio::test]
async fn test_submit_contact_with_service_subject() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    app.server
        .post("/api/contact")
        .json(&json!({
            "name": "Ana",
            "email": "a@x.rw",
            "phone": "0788",
            "service": "Solar",
            "message": "Quote please"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let messages: Vec<serde_json::Value> = app
        .server
        .get("/api/admin/messages")
        .add_header("Authorization", auth.auth_header())
        .await
        .json();
    assert_eq!(messages[0]["subject"], "Inquiry about Solar");
}

#[tokio::test]
async fn test_submit_contact_missing_message() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/contact")
        .json(&json!({
            "name": "Ana",
            "email": "a@x.rw",
            "message": "  "
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mark_read_is_idempotent() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let auth = factory.create_admin().await;
    let message = factory.create_message().await;

    for _ in 0..2 {
        app.server
            .put(&format!("/api/admin/messages/{}/read", message.id))
            .add_header("Authorization", auth.auth_header())
            .await
            .assert_status_ok();
    }

    let messages: Vec<serde_json::Value> = app
        .server
        .get("/api/admin/messages")
        .add_header("Authorization", auth.auth_header())
        .await
        .json();
    assert_eq!(messages[0]["is_read"], true);
}

#[tokio::test]
async fn test_mark_read_not_found() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .put("/api/admin/messages/9999/read")
        .add_header("Authorization", auth.auth_header())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_message() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let auth = factory.create_admin().await;
    let message = factory.create_message().await;

    app.server
        .delete(&format!("/api/admin/messages/{}", message.id))
        .add_header("Authorization", auth.auth_header())
        .await
        .assert_status_ok();

    app.server
        .delete(&format!("/api/admin/messages/{}", message.id))
        .add_header("Authorization", auth.auth_header())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_messages() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let auth = factory.create_admin().await;
    factory.create_message().await;
    factory.create_message().await;

    let response = app
        .server
        .delete("/api/admin/messages/all")
        .add_header("Authorization", auth.auth_header())
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], 2);

    let messages: Vec<serde_json::Value> = app
        .server
        .get("/api/admin/messages")
        .add_header("Authorization", auth.auth_header())
        .await
        .json();
    assert!(messages.is_empty());
}
