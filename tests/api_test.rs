//! Integration tests for API endpoints.
//!
//! These tests drive the real router over an in-memory account store,
//! without requiring a database connection.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use async_trait::async_trait;
use sea_orm::DbErr;
use serde_json::{json, Value};
use tower::ServiceExt;

use account_registrar::api::{create_router, AppState};
use account_registrar::config::{Config, HashingConfig, EMAIL_TAKEN_MESSAGE};
use account_registrar::domain::{Account, NewAccount};
use account_registrar::errors::{AppError, AppResult};
use account_registrar::infra::{AccountRepository, InMemoryAccountStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config() -> Config {
    Config {
        database_url: "unused".to_string(),
        hashing: HashingConfig::minimal(),
    }
}

fn test_app() -> (Router, Arc<InMemoryAccountStore>) {
    let store = Arc::new(InMemoryAccountStore::new());
    let state = AppState::with_store(store.clone(), &test_config()).unwrap();
    (create_router(state), store)
}

fn post_accounts(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/accounts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn error_message(body: &[u8]) -> String {
    let value: Value = serde_json::from_slice(body).unwrap();
    value["error"]["message"].as_str().unwrap().to_string()
}

fn error_code(body: &[u8]) -> String {
    let value: Value = serde_json::from_slice(body).unwrap();
    value["error"]["code"].as_str().unwrap().to_string()
}

/// Store whose backend is down.
struct UnreachableStore;

fn backend_down() -> AppError {
    AppError::Database(DbErr::Custom("pool timed out at 10.0.0.7:5432".to_string()))
}

#[async_trait]
impl AccountRepository for UnreachableStore {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<Account>> {
        Err(backend_down())
    }

    async fn create(&self, _account: NewAccount) -> AppResult<Account> {
        Err(backend_down())
    }

    async fn ping(&self) -> AppResult<()> {
        Err(backend_down())
    }
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_creates_account() {
    let (app, store) = test_app();

    let body = json!({ "name": "Ada", "email": "ada@example.com", "password": "s3cret" });
    let (status, response) = send(&app, post_accounts(body.to_string())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(response.is_empty());

    let accounts = store.all().await;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name, "Ada");
    assert_eq!(accounts[0].email, "ada@example.com");
    assert_ne!(accounts[0].credential.as_str(), "s3cret");
    assert!(accounts[0].credential.verify("s3cret"));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let (app, store) = test_app();

    let first = json!({ "name": "Ada", "email": "ada@example.com", "password": "s3cret" });
    let (status, _) = send(&app, post_accounts(first.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);

    // Different name and password, same email
    let second = json!({ "name": "Imposter", "email": "ada@example.com", "password": "other" });
    let (status, response) = send(&app, post_accounts(second.to_string())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_message(&response), EMAIL_TAKEN_MESSAGE);

    let accounts = store.all().await;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name, "Ada");
    assert!(accounts[0].credential.verify("s3cret"));
}

#[tokio::test]
async fn test_register_invalid_email_rejected() {
    let (app, store) = test_app();

    let body = json!({ "name": "Bob", "email": "not-an-email", "password": "pw" });
    let (status, response) = send(&app, post_accounts(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response), "Invalid email format");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_register_missing_field_rejected() {
    let (app, store) = test_app();

    let body = json!({ "name": "Bob", "email": "bob@example.com" });
    let (status, response) = send(&app, post_accounts(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&response).unwrap();
    assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_register_empty_name_and_password_rejected() {
    let (app, store) = test_app();

    let body = json!({ "name": "", "email": "bob@example.com", "password": "" });
    let (status, response) = send(&app, post_accounts(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&response),
        "Name is required, Password is required"
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_register_malformed_json_rejected() {
    let (app, store) = test_app();

    let (status, _) = send(&app, post_accounts("{\"name\": ".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_register_oversized_body_rejected() {
    let (app, store) = test_app();

    let body = json!({
        "name": "x".repeat(3 * 1024 * 1024),
        "email": "big@example.com",
        "password": "s3cret",
    });
    let (status, response) = send(&app, post_accounts(body.to_string())).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(error_code(&response), "PAYLOAD_TOO_LARGE");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_register_store_failure_hides_details() {
    let state = AppState::with_store(Arc::new(UnreachableStore), &test_config()).unwrap();
    let app = create_router(state);

    let body = json!({ "name": "Ada", "email": "ada@example.com", "password": "s3cret" });
    let (status, response) = send(&app, post_accounts(body.to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_code(&response), "DATABASE_ERROR");
    assert_eq!(error_message(&response), "A database error occurred");
    assert!(!String::from_utf8_lossy(&response).contains("10.0.0.7"));
}

#[tokio::test]
async fn test_concurrent_duplicate_registrations() {
    let (app, store) = test_app();

    let requests = (0..8).map(|i| {
        let app = app.clone();
        let body = json!({
            "name": format!("User {}", i),
            "email": "race@example.com",
            "password": format!("pw-{}", i),
        });
        tokio::spawn(async move { send(&app, post_accounts(body.to_string())).await.0 })
    });

    let mut created = 0;
    let mut conflicts = 0;
    for handle in requests.collect::<Vec<_>>() {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(store.len().await, 1);
}

// =============================================================================
// Health & Docs
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = test_app();

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, response) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&response).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_accounts_path() {
    let (app, _) = test_app();

    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, response) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&response).unwrap();
    assert!(value["paths"]["/accounts"]["post"].is_object());
}
