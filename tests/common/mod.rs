//! Shared helpers for integration tests.
//!
//! Every test gets its own in-memory SQLite database with migrations applied.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use message_board::api::{create_router, AppState};
use message_board::config::Config;
use message_board::infra::Database;

/// Configuration pointing at a private in-memory database.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        // A second pooled connection would open a different in-memory database
        database_max_connections: 1,
        database_min_connections: 1,
        ..Config::default()
    }
}

/// Connect and apply migrations.
pub async fn test_database() -> Arc<Database> {
    let db = Database::connect(&test_config())
        .await
        .expect("in-memory database should connect");
    Arc::new(db)
}

/// Router wired to a fresh database, plus the database handle.
pub async fn test_app() -> (Router, Arc<Database>) {
    let db = test_database().await;
    let app = create_router(AppState::from_database(db.clone()));
    (app, db)
}

/// Issue a request and return status plus raw body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should not fail");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, body.to_vec())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}
