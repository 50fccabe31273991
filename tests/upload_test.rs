mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};

use common::{Factory, TestApp};

fn image_form(file_name: &str, bytes: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(bytes.to_vec())
            .file_name(file_name)
            .mime_type("application/octet-stream"),
    )
}

#[tokio::test]
async fn test_upload_image_and_serve_it() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .post("/api/upload/project-image")
        .add_header("Authorization", auth.auth_header())
        .multipart(image_form("Site Photo.JPG", b"jpeg bytes"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let image_url = body["imageUrl"].as_str().unwrap();
    assert!(image_url.starts_with("/api/uploads/"));
    assert!(image_url.ends_with(".jpg"));

    let served = app.server.get(image_url).await;
    served.assert_status_ok();
    assert_eq!(served.as_bytes().as_ref(), b"jpeg bytes");
}

#[tokio::test]
async fn test_upload_names_never_collide() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let mut urls = Vec::new();
    for _ in 0..3 {
        let body: serde_json::Value = app
            .server
            .post("/api/upload/project-image")
            .add_header("Authorization", auth.auth_header())
            .multipart(image_form("same.png", b"png"))
            .await
            .json();
        urls.push(body["imageUrl"].as_str().unwrap().to_string());
    }

    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), 3);
}

#[tokio::test]
async fn test_upload_missing_file() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .post("/api/upload/project-image")
        .add_header("Authorization", auth.auth_header())
        .multipart(MultipartForm::new().add_text("note", "no file here"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_empty_file() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .post("/api/upload/project-image")
        .add_header("Authorization", auth.auth_header())
        .multipart(image_form("empty.png", b""))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_rejects_non_image_extension() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;

    let response = app
        .server
        .post("/api/upload/project-image")
        .add_header("Authorization", auth.auth_header())
        .multipart(image_form("shell.php", b"<?php echo 1;"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.state.uploads.size_bytes().await.unwrap(), 0);
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let app = TestApp::new().await;
    let auth = Factory::new(&app.state).create_admin().await;
    let oversized = vec![0u8; app.state.config.max_upload_bytes * 2];

    let response = app
        .server
        .post("/api/upload/project-image")
        .add_header("Authorization", auth.auth_header())
        .multipart(image_form("huge.png", &oversized))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Payload too large");
    assert_eq!(app.state.uploads.size_bytes().await.unwrap(), 0);
}

#[tokio::test]
async fn test_upload_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/upload/project-image")
        .multipart(image_form("a.png", b"png"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
