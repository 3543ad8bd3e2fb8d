//! Web API User Tests
//!
//! Integration tests for user listing, profiles and per-user message lists.

mod common;

use axum::http::StatusCode;
use common::{bearer, create_test_server, register_test_user, send_message};
use serde_json::Value;

#[tokio::test]
async fn test_list_users_ordered() {
    let (server, _db) = create_test_server().await;
    let carol = register_test_user(&server, "carol").await;
    register_test_user(&server, "alice").await;
    register_test_user(&server, "bob").await;

    let response = bearer(server.get("/api/users"), &carol).await;
    response.assert_status_ok();

    let body: Value = response.json();
    let users = body["data"].as_array().unwrap();
    let names: Vec<&str> = users
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["alice", "bob", "carol"]);
    assert!(users[0]["password"].is_null());
    assert_eq!(users[0]["phone"], "555-0100");
}

#[tokio::test]
async fn test_get_own_profile() {
    let (server, _db) = create_test_server().await;
    let alice = register_test_user(&server, "alice").await;

    let response = bearer(server.get("/api/users/alice"), &alice).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["first_name"], "alice-first");
    assert_eq!(body["data"]["last_name"], "alice-last");
    assert!(body["data"]["join_at"].is_string());
    assert!(body["data"]["password"].is_null());
}

#[tokio::test]
async fn test_get_other_profile_forbidden() {
    let (server, _db) = create_test_server().await;
    let alice = register_test_user(&server, "alice").await;
    register_test_user(&server, "bob").await;

    let response = bearer(server.get("/api/users/bob"), &alice).await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_message_lists() {
    let (server, _db) = create_test_server().await;
    let alice = register_test_user(&server, "alice").await;
    let bob = register_test_user(&server, "bob").await;

    let first = send_message(&server, &alice, "bob", "first").await;
    let second = send_message(&server, &alice, "bob", "second").await;
    send_message(&server, &bob, "alice", "reply").await;

    // Sent by alice, newest first
    let response = bearer(server.get("/api/users/alice/from"), &alice).await;
    response.assert_status_ok();
    let body: Value = response.json();
    let sent = body["data"].as_array().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["id"], second);
    assert_eq!(sent[1]["id"], first);
    assert_eq!(sent[0]["to_user"]["username"], "bob");
    assert!(sent[0]["read_at"].is_null());

    // Received by bob
    let response = bearer(server.get("/api/users/bob/to"), &bob).await;
    response.assert_status_ok();
    let body: Value = response.json();
    let received = body["data"].as_array().unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0]["from_user"]["username"], "alice");
    assert_eq!(received[0]["body"], "second");

    // Received by alice
    let response = bearer(server.get("/api/users/alice/to"), &alice).await;
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["body"], "reply");
}

#[tokio::test]
async fn test_message_lists_of_other_user_forbidden() {
    let (server, _db) = create_test_server().await;
    let alice = register_test_user(&server, "alice").await;
    register_test_user(&server, "bob").await;

    let response = bearer(server.get("/api/users/bob/to"), &alice).await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = bearer(server.get("/api/users/bob/from"), &alice).await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_read_state_shows_in_sent_list() {
    let (server, _db) = create_test_server().await;
    let alice = register_test_user(&server, "alice").await;
    let bob = register_test_user(&server, "bob").await;

    let id = send_message(&server, &alice, "bob", "hi").await;
    bearer(server.post(&format!("/api/messages/{id}/read")), &bob)
        .await
        .assert_status_ok();

    let response = bearer(server.get("/api/users/alice/from"), &alice).await;
    let body: Value = response.json();
    assert!(body["data"][0]["read_at"].is_string());
}
