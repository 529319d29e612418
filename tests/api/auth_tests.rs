//! Authentication API Tests
//!
//! Validation-path tests that never reach the database.

use axum::http::StatusCode;

use crate::common::TestApp;

/// Registration fails with an invalid email before touching storage
#[tokio::test]
async fn test_register_with_invalid_email_fails() {
    let app = TestApp::new();
    let body = r#"{"username":"testuser","email":"not-an-email","password":"ValidPassword123!"}"#;

    let response = app.post_json("/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Registration fails with a short password
#[tokio::test]
async fn test_register_with_short_password_fails() {
    let app = TestApp::new();
    let body = r#"{"username":"testuser","email":"test@example.com","password":"short"}"#;

    let response = app.post_json("/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Registration fails with a too-short username
#[tokio::test]
async fn test_register_with_short_username_fails() {
    let app = TestApp::new();
    let body = r#"{"username":"x","email":"test@example.com","password":"ValidPassword123!"}"#;

    let response = app.post_json("/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Login fails with a malformed email
#[tokio::test]
async fn test_login_with_invalid_email_fails() {
    let app = TestApp::new();
    let body = r#"{"email":"not-an-email","password":"ValidPassword123!"}"#;

    let response = app.post_json("/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A request body missing required fields is rejected by the extractor
#[tokio::test]
async fn test_register_with_missing_fields_fails() {
    let app = TestApp::new();
    let body = r#"{"username":"testuser"}"#;

    let response = app.post_json("/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
