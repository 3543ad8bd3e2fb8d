//! Test helpers for web API integration tests.

#![allow(dead_code)]

use axum::http::header::AUTHORIZATION;
use axum_test::{TestRequest, TestServer};
use messagely::web::router::create_app;
use messagely::web::{AppState, JwtState};
use messagely::Database;
use serde_json::{json, Value};
use std::sync::Arc;

/// JWT secret used by every test server.
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only";

/// Default password for registered test users.
pub const TEST_PASSWORD: &str = "password123";

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone(), TEST_JWT_SECRET, 900));
    let jwt_state = Arc::new(JwtState::new(TEST_JWT_SECRET));

    let router = create_app(app_state, jwt_state, &[]);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Register a user and return the issued token.
pub async fn register_test_user(server: &TestServer, username: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "password": TEST_PASSWORD,
            "first_name": format!("{username}-first"),
            "last_name": format!("{username}-last"),
            "phone": "555-0100"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    get_token(&response.json::<Value>())
}

/// Get the token from a register/login response.
pub fn get_token(response: &Value) -> String {
    response["data"]["token"].as_str().unwrap().to_string()
}

/// Attach a bearer token to a request.
pub fn bearer(request: TestRequest, token: &str) -> TestRequest {
    request.add_header(AUTHORIZATION, format!("Bearer {}", token))
}

/// Send a message and return its id.
pub async fn send_message(server: &TestServer, token: &str, to: &str, body: &str) -> i64 {
    let response = bearer(server.post("/api/messages"), token)
        .json(&json!({ "to_username": to, "body": body }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"]["id"].as_i64().unwrap()
}
