mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};

use common::{Factory, TestApp};
use redline_site::models::{AdminStats, RequestStatus};
use redline_site::repositories::{ContactMessageRepository, ServiceRequestRepository};

#[tokio::test]
async fn test_stats_empty() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .get("/api/admin/stats")
        .add_header("Authorization", auth.auth_header())
        .await;

    response.assert_status(StatusCode::OK);
    let stats: AdminStats = response.json();
    assert_eq!(stats.total_messages, 0);
    assert_eq!(stats.total_requests, 0);
    assert_eq!(stats.total_projects, 0);
    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.storage_used, 0);
}

#[tokio::test]
async fn test_stats_counts() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let auth = factory.create_admin().await;
    factory.create_bootstrap_user().await;

    let read = factory.create_message().await;
    factory.create_message().await;
    factory.create_message().await;
    ContactMessageRepository::mark_read(&app.state.db, read.id)
        .await
        .unwrap();

    let done = factory.create_service_request().await;
    factory.create_service_request().await;
    ServiceRequestRepository::update_status(&app.state.db, done.id, RequestStatus::Completed)
        .await
        .unwrap();

    factory.create_project().await;

    app.server
        .post("/api/upload/project-image")
        .add_header("Authorization", auth.auth_header())
        .multipart(MultipartForm::new().add_part(
            "image",
            Part::bytes(vec![0u8; 1500]).file_name("a.png"),
        ))
        .await
        .assert_status_ok();

    let response = app
        .server
        .get("/api/admin/stats")
        .add_header("Authorization", auth.auth_header())
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["totalMessages"], 3);
    assert_eq!(body["unreadMessages"], 2);
    assert_eq!(body["readMessages"], 1);
    assert_eq!(body["totalRequests"], 2);
    assert_eq!(body["pendingRequests"], 1);
    assert_eq!(body["completedRequests"], 1);
    assert_eq!(body["totalProjects"], 1);
    assert_eq!(body["totalUsers"], 1);
    assert_eq!(body["storageUsed"], 1500);
    assert!(body["serverUptime"].as_u64().is_some());
}
