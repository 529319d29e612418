//! Health Check and Service Surface Tests

use axum::http::StatusCode;

use crate::common::TestApp;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Basic health check endpoint returns 200 OK with a status body
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"healthy\""));
    assert!(body.contains("\"version\""));
}

/// Liveness probe should always return 200 even without dependencies
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"alive\""));
}

/// Unmatched browser routes redirect to the application root
/// instead of returning a 404 body
#[tokio::test]
async fn test_unknown_route_redirects_to_root() {
    let app = TestApp::new();

    let response = app.get("/definitely/not/a/route").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
}

/// Prometheus metrics endpoint serves the text exposition format
#[tokio::test]
async fn test_metrics_endpoint() {
    let app = TestApp::new();

    // Generate at least one request so counters exist
    let _ = app.get("/health").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("http_requests_total"));
}

/// The OpenAPI document is served for the Swagger UI
#[tokio::test]
async fn test_openapi_document_served() {
    let app = TestApp::new();

    let response = app.get("/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"openapi\""));
    assert!(body.contains("/api/v1/characters"));
}

/// Swagger UI is mounted at /api
#[tokio::test]
async fn test_swagger_ui_mounted() {
    let app = TestApp::new();

    let response = app.get("/api").await;

    // Served directly or via redirect to /api/, never the SPA fallback
    assert!(
        response.status().is_success() || response.status().is_redirection(),
        "unexpected status: {}",
        response.status()
    );
}
