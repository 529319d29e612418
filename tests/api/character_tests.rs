//! Character API Tests
//!
//! Authentication and validation paths that never reach the database.

use axum::http::StatusCode;

use crate::common::{access_token_for, expired_token_for, TestApp};

/// Character routes require authentication
#[tokio::test]
async fn test_list_characters_without_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get("/api/v1/characters").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A malformed bearer token is rejected
#[tokio::test]
async fn test_list_characters_with_garbage_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get_auth("/api/v1/characters", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An expired token is rejected
#[tokio::test]
async fn test_list_characters_with_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let token = expired_token_for("USR-TEST1");

    let response = app.get_auth("/api/v1/characters", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Creating a character with an out-of-range level fails validation
#[tokio::test]
async fn test_create_character_with_invalid_level_fails() {
    let app = TestApp::new();
    let token = access_token_for("USR-TEST1");
    let body = r#"{"name":"Zelda","race":"Hylian","level":21,"max_health":12,"health":12}"#;

    let response = app
        .send_json_auth("POST", "/api/v1/characters", body, &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Creating a character with an empty name fails validation
#[tokio::test]
async fn test_create_character_with_empty_name_fails() {
    let app = TestApp::new();
    let token = access_token_for("USR-TEST1");
    let body = r#"{"name":"","race":"Hylian","max_health":12,"health":12}"#;

    let response = app
        .send_json_auth("POST", "/api/v1/characters", body, &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Updating a character with an out-of-range level fails validation
#[tokio::test]
async fn test_update_character_with_invalid_level_fails() {
    let app = TestApp::new();
    let token = access_token_for("USR-TEST1");
    let body = r#"{"level":0}"#;

    let response = app
        .send_json_auth("PATCH", "/api/v1/characters/CHR-TEST1", body, &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Adding an ability score outside 1-30 fails validation
#[tokio::test]
async fn test_create_ability_score_with_invalid_value_fails() {
    let app = TestApp::new();
    let token = access_token_for("USR-TEST1");
    let body = r#"{"ability":"strength","score":0}"#;

    let response = app
        .send_json_auth(
            "POST",
            "/api/v1/characters/CHR-TEST1/ability-scores",
            body,
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Adding a spell above level 9 fails validation
#[tokio::test]
async fn test_create_spell_with_invalid_level_fails() {
    let app = TestApp::new();
    let token = access_token_for("USR-TEST1");
    let body = r#"{"name":"Wish","level":10}"#;

    let response = app
        .send_json_auth("POST", "/api/v1/characters/CHR-TEST1/spells", body, &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
