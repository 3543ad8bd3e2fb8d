//! Web API Auth Tests
//!
//! Integration tests for registration, login and token handling.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use common::{bearer, create_test_server, get_token, register_test_user, TEST_PASSWORD};
use serde_json::{json, Value};

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_returns_token() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "password123",
            "first_name": "Alice",
            "last_name": "Anderson",
            "phone": "555-0100"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(!get_token(&body).is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (server, _db) = create_test_server().await;
    register_test_user(&server, "alice").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "another-password",
            "first_name": "Other",
            "last_name": "Alice",
            "phone": "555-0199"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_invalid_fields() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "al",
            "password": "password123",
            "first_name": "Al",
            "last_name": "A",
            "phone": "555"
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "short",
            "first_name": "Alice",
            "last_name": "A",
            "phone": "555"
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_malformed_json() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let (server, _db) = create_test_server().await;
    register_test_user(&server, "alice").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
    let token = get_token(&response.json::<Value>());

    let response = bearer(server.get("/api/users/alice"), &token).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["data"]["last_login_at"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, _db) = create_test_server().await;
    register_test_user(&server, "alice").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": "wrong-password" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "nobody", "password": TEST_PASSWORD }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Token handling
// ============================================================================

#[tokio::test]
async fn test_missing_token_rejected() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/users").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let (server, _db) = create_test_server().await;

    let response = server
        .get("/api/users")
        .add_header(AUTHORIZATION, "Bearer not-a-jwt".to_string())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use messagely::web::middleware::JwtClaims;

    let (server, _db) = create_test_server().await;
    register_test_user(&server, "alice").await;

    let now = chrono::Utc::now().timestamp() as u64;
    let claims = JwtClaims {
        sub: "alice".to_string(),
        iat: now,
        exp: now + 900,
        jti: uuid::Uuid::new_v4().to_string(),
    };
    let forged = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = bearer(server.get("/api/users"), &forged).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_and_openapi_are_public() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"]["/auth/login"].is_object());
}
