//! Customer API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{customer_payload, TestApp};

#[tokio::test]
async fn test_create_customer() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/customers", &customer_payload("John")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"], "John");
    assert_eq!(
        body["address"],
        json!({ "street": "Street", "city": "City", "number": 123, "zip": "Zip" })
    );
}

#[tokio::test]
async fn test_create_customer_with_empty_name() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/customers", &customer_payload("")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");
    assert_eq!(
        body["errors"],
        json!([{ "context": "Customer", "message": "Name is required" }])
    );
}

#[tokio::test]
async fn test_create_customer_reports_every_violation() {
    let app = TestApp::new();
    let payload = json!({
        "name": "",
        "address": { "street": "", "number": 1, "city": "", "zip": "" }
    });

    let (status, body) = app.post_json("/customers", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let messages: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Name is required",
            "Street is required",
            "City is required",
            "Zip is required"
        ]
    );
}

#[tokio::test]
async fn test_create_customer_with_malformed_json() {
    let app = TestApp::new();

    let (status, body) = app.post_raw("/customers", "{\"name\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_customer_without_address() {
    let app = TestApp::new();

    let (status, _) = app.post_json("/customers", &json!({ "name": "John" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_find_customer() {
    let app = TestApp::new();
    let (_, created) = app.post_json("/customers", &customer_payload("John")).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.get(&format!("/customers/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_find_missing_customer() {
    let app = TestApp::new();

    let (status, body) = app.get("/customers/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Customer not found" }));
}

#[tokio::test]
async fn test_list_customers() {
    let app = TestApp::new();
    app.post_json("/customers", &customer_payload("John")).await;
    app.post_json("/customers", &customer_payload("Jane")).await;

    let (status, body) = app.get("/customers").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["customers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["John", "Jane"]);
}

#[tokio::test]
async fn test_list_customers_empty() {
    let app = TestApp::new();

    let (status, body) = app.get("/customers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "customers": [] }));
}

#[tokio::test]
async fn test_update_customer() {
    let app = TestApp::new();
    let (_, created) = app.post_json("/customers", &customer_payload("John")).await;
    let id = created["id"].as_str().unwrap();
    let payload = json!({
        "name": "John Updated",
        "address": { "street": "Street Updated", "number": 1234, "city": "City Updated", "zip": "Zip Updated" }
    });

    let (status, body) = app.put_json(&format!("/customers/{id}"), &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "John Updated");
    assert_eq!(body["address"]["number"], 1234);

    let (_, found) = app.get(&format!("/customers/{id}")).await;
    assert_eq!(found, body);
}

#[tokio::test]
async fn test_update_customer_with_empty_name_keeps_stored_copy() {
    let app = TestApp::new();
    let (_, created) = app.post_json("/customers", &customer_payload("John")).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .put_json(&format!("/customers/{id}"), &customer_payload(""))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");

    let (_, found) = app.get(&format!("/customers/{id}")).await;
    assert_eq!(found["name"], "John");
}

#[tokio::test]
async fn test_update_missing_customer() {
    let app = TestApp::new();

    let (status, body) = app
        .put_json("/customers/does-not-exist", &customer_payload("John"))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Customer not found");
}
