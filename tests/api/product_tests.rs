//! Product API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{product_payload, TestApp};

#[tokio::test]
async fn test_create_product() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/products", &product_payload("Product 1", 10.0))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"], "Product 1");
    assert_eq!(body["price"], 10.0);
}

#[test_case(0.0 ; "zero")]
#[test_case(-1.0 ; "negative")]
#[tokio::test]
async fn test_create_product_with_invalid_price(price: f64) {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/products", &product_payload("Product 1", price))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "product: Price is required and must be greater than 0");
    assert_eq!(body["errors"][0]["context"], "product");
}

#[tokio::test]
async fn test_create_product_reports_name_and_price() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/products", &product_payload("", -1.0)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "product: Name is required, product: Price is required and must be greater than 0"
    );
    assert_eq!(
        body["errors"],
        json!([
            { "context": "product", "message": "Name is required" },
            { "context": "product", "message": "Price is required and must be greater than 0" }
        ])
    );
}

#[tokio::test]
async fn test_create_product_with_empty_name() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/products", &product_payload("", 999.99))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "product: Name is required");
}

#[tokio::test]
async fn test_update_product_with_empty_name() {
    let app = TestApp::new();
    let (_, created) = app
        .post_json("/products", &product_payload("Product 1", 10.0))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .put_json(&format!("/products/{id}"), &product_payload("", 10.0))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "product: Name is required");
}

#[tokio::test]
async fn test_create_product_with_string_price() {
    let app = TestApp::new();

    let (status, _) = app
        .post_json("/products", &json!({ "name": "Product 1", "price": "ten" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_find_product() {
    let app = TestApp::new();
    let (_, created) = app
        .post_json("/products", &product_payload("Product 1", 10.0))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.get(&format!("/products/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_find_missing_product() {
    let app = TestApp::new();

    let (status, body) = app.get("/products/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn test_list_products() {
    let app = TestApp::new();
    app.post_json("/products", &product_payload("Product 1", 10.0))
        .await;
    app.post_json("/products", &product_payload("Product 2", 20.0))
        .await;

    let (status, body) = app.get("/products").await;

    assert_eq!(status, StatusCode::OK);
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Product 1");
    assert_eq!(products[1]["price"], 20.0);
}

#[tokio::test]
async fn test_update_product() {
    let app = TestApp::new();
    let (_, created) = app
        .post_json("/products", &product_payload("Product 1", 10.0))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .put_json(&format!("/products/{id}"), &product_payload("Product Updated", 15.5))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id, "name": "Product Updated", "price": 15.5 })
    );
}

#[tokio::test]
async fn test_update_product_with_invalid_price_keeps_stored_copy() {
    let app = TestApp::new();
    let (_, created) = app
        .post_json("/products", &product_payload("Product 1", 10.0))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .put_json(&format!("/products/{id}"), &product_payload("Product 1", 0.0))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "product: Price is required and must be greater than 0");

    let (_, found) = app.get(&format!("/products/{id}")).await;
    assert_eq!(found["price"], 10.0);
}

#[tokio::test]
async fn test_update_missing_product() {
    let app = TestApp::new();

    let (status, body) = app
        .put_json("/products/does-not-exist", &product_payload("Product 1", 10.0))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Product not found");
}
