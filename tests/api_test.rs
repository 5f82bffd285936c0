//! Integration tests for API endpoints.
//!
//! Requests go through the full router against an in-memory SQLite database.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{get, post_json, send, test_app};
use message_board::domain::MessageResponse;

// =============================================================================
// Root listing and generated messages
// =============================================================================

#[tokio::test]
async fn test_root_lists_nothing_on_empty_store() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let messages: Vec<MessageResponse> = serde_json::from_slice(&body).unwrap();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_add_message_returns_succeeded() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/add-message")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Succeeded");
}

#[tokio::test]
async fn test_added_messages_are_listed_in_order() {
    let (app, _db) = test_app().await;

    for _ in 0..3 {
        let (status, _) = send(&app, get("/add-message")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let messages: Vec<MessageResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
    for message in &messages {
        assert!(message.content.starts_with("New content generated at "));
        assert!(message.content.ends_with(&message.created_at.format("%Y").to_string()));
    }
}

#[tokio::test]
async fn test_root_json_shape() {
    let (app, _db) = test_app().await;
    send(&app, get("/add-message")).await;

    let (_, body) = send(&app, get("/")).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    let first = &json.as_array().unwrap()[0];

    assert!(first["id"].is_number());
    assert!(first["content"].is_string());
    assert!(first["created_at"].is_string());
}

// =============================================================================
// Message resource endpoints
// =============================================================================

#[tokio::test]
async fn test_create_and_fetch_message() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, post_json("/messages", r#"{"content":"hello"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: MessageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.content, "hello");

    let (status, body) = send(&app, get(&format!("/messages/{}", created.id))).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: MessageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_missing_message_is_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/messages/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_rejects_empty_content() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, post_json("/messages", r#"{"content":""}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, post_json("/messages", "{oops")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_paginated_listing() {
    let (app, _db) = test_app().await;

    for i in 0..5 {
        let payload = format!(r#"{{"content":"message {}"}}"#, i);
        let (status, _) = send(&app, post_json("/messages", &payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/messages?page=2&per_page=2")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["content"], "message 2");
    assert_eq!(data[1]["content"], "message 3");
    assert_eq!(json["meta"]["page"], 2);
    assert_eq!(json["meta"]["per_page"], 2);
    assert_eq!(json["meta"]["total"], 5);
    assert_eq!(json["meta"]["total_pages"], 3);
}

#[tokio::test]
async fn test_paginated_listing_defaults() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/messages")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["meta"]["page"], 1);
    assert_eq!(json["meta"]["per_page"], 20);
    assert_eq!(json["meta"]["total"], 0);
}

#[tokio::test]
async fn test_per_page_is_capped() {
    let (app, _db) = test_app().await;
    for i in 0..3 {
        let payload = format!(r#"{{"content":"message {}"}}"#, i);
        send(&app, post_json("/messages", &payload)).await;
    }

    let (status, body) = send(&app, get("/messages?per_page=500")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    assert_eq!(json["meta"]["per_page"], 100);
    assert_eq!(json["meta"]["total_pages"], 1);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let (app, _db) = test_app().await;
    for i in 0..2 {
        let payload = format!(r#"{{"content":"message {}"}}"#, i);
        send(&app, post_json("/messages", &payload)).await;
    }

    let (status, body) = send(&app, get("/messages?page=5&per_page=2")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["data"].as_array().unwrap().is_empty());
    assert_eq!(json["meta"]["page"], 5);
    assert_eq!(json["meta"]["total"], 2);
    assert_eq!(json["meta"]["total_pages"], 1);
}

#[tokio::test]
async fn test_huge_page_numbers_do_not_overflow() {
    let (app, _db) = test_app().await;
    send(&app, get("/add-message")).await;

    for uri in [
        "/messages?page=18446744073709551615&per_page=100",
        "/messages?page=200000000000000000",
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["data"].as_array().unwrap().is_empty());
        assert_eq!(json["meta"]["total"], 1);
    }
}

#[tokio::test]
async fn test_malformed_query_is_json_error() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/messages?page=-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"]["message"].is_string());
}

#[tokio::test]
async fn test_malformed_id_is_json_error() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/messages/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Health and documentation
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["services"]["database"]["status"], "healthy");
    assert!(json["services"]["database"].get("error").is_none());
}

#[tokio::test]
async fn test_health_degraded_when_database_closed() {
    let (app, db) = test_app().await;
    db.get_connection().close().await.unwrap();

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["services"]["database"]["status"], "unhealthy");
    assert!(json["services"]["database"]["error"].is_string());
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["paths"]["/add-message"].is_object());
}
