//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use commerce_service::config::Settings;
use commerce_service::startup::{build_router, AppState};

/// Test application backed by in-memory repositories
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with empty storage
    pub fn new() -> Self {
        let config = Settings::defaults("test").unwrap().build().unwrap();
        let settings = Settings::from_config(config).unwrap();

        Self {
            router: build_router(AppState::in_memory(settings)),
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with a raw JSON body
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, &body.to_string()).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

/// Valid customer payload
pub fn customer_payload(name: &str) -> Value {
    json!({
        "name": name,
        "address": {
            "street": "Street",
            "number": 123,
            "city": "City",
            "zip": "Zip"
        }
    })
}

/// Valid product payload
pub fn product_payload(name: &str, price: f64) -> Value {
    json!({ "name": name, "price": price })
}
