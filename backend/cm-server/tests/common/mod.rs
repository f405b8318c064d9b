#![allow(dead_code)]

//! Test infrastructure for cm-server API tests

use cm_core::{
    CustomerService, CustomerStore, CustomerValidator, IdentityError, IdentityVerifier,
};
use cm_db::CustomerRepository;
use cm_server::AppState;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const VALID_GITHUB_USER: &str = "validuser";
pub const OTHER_GITHUB_USER: &str = "otheruser";

/// Answers from a fixed set of usernames
pub struct KnownUsersVerifier {
    known: HashSet<String>,
}

#[async_trait]
impl IdentityVerifier for KnownUsersVerifier {
    async fn exists(&self, username: &str) -> Result<bool, IdentityError> {
        Ok(self.known.contains(username))
    }
}

/// Behaves like GitHub being down
pub struct DownVerifier;

#[async_trait]
impl IdentityVerifier for DownVerifier {
    async fn exists(&self, _username: &str) -> Result<bool, IdentityError> {
        Err(IdentityError::unexpected_status(502, "any"))
    }
}

pub async fn create_test_app_state_with(verifier: Arc<dyn IdentityVerifier>) -> AppState {
    let pool = cm_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    let validator = CustomerValidator::new(verifier, Duration::from_secs(5));
    let store: Arc<dyn CustomerStore> = Arc::new(CustomerRepository::new(pool.clone()));
    let service = Arc::new(CustomerService::new(validator, store));

    AppState::new(service, pool)
}

/// AppState over in-memory SQLite where `validuser` and `otheruser` exist
pub async fn create_test_app_state() -> AppState {
    let known = [VALID_GITHUB_USER, OTHER_GITHUB_USER]
        .iter()
        .map(|u| u.to_string())
        .collect();
    create_test_app_state_with(Arc::new(KnownUsersVerifier { known })).await
}

pub fn jane_doe() -> Value {
    json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "gitHubUsername": VALID_GITHUB_USER,
        "dateOfBirth": "1990-01-01"
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// POST a customer and return its id, asserting it was created
pub async fn create_customer(app: &Router, body: Value) -> String {
    let response = send(app, "POST", "/customers", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()["id"].as_str().unwrap().to_string()
}
