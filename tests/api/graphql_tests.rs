//! GraphQL Endpoint Tests

use axum::http::StatusCode;

use crate::common::TestApp;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// GraphiQL IDE is served on GET
#[tokio::test]
async fn test_graphiql_ide_served() {
    let app = TestApp::new();

    let response = app.get("/graphiql").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("graphiql"));
}

/// Introspection of the root type works without storage
#[tokio::test]
async fn test_graphql_typename_query() {
    let app = TestApp::new();

    let response = app
        .post_json("/graphql", r#"{"query":"{ __typename }"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"__typename\":\"Query\""));
}

/// A malformed query is reported through the errors field
#[tokio::test]
async fn test_graphql_malformed_query_reports_errors() {
    let app = TestApp::new();

    let response = app
        .post_json("/graphql", r#"{"query":"{ nonsense"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"errors\""));
}

/// The schema exposes the character queries
#[tokio::test]
async fn test_graphql_schema_exposes_character_queries() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/graphql",
            r#"{"query":"{ __type(name: \"Query\") { fields { name } } }"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("character"));
    assert!(body.contains("spells"));
    assert!(body.contains("abilityScores"));
}
