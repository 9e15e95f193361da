//! Product Handlers
//!
//! Validation failures put the combined `"product: <message>"` text in `error`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateProductRequest, UpdateProductRequest};
use crate::application::dto::response::{ProductListResponse, ProductResponse};
use crate::application::services::ProductError;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = state
        .products
        .create_product(body.into())
        .await
        .map_err(|e| match e {
            ProductError::Validation(e) => AppError::ValidationSummary(e),
            ProductError::NotFound => AppError::BadRequest(e.to_string()),
            ProductError::Conflict(msg) => AppError::Conflict(msg),
            ProductError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Get product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .products
        .find_product(&product_id)
        .await
        .map_err(|e| match e {
            ProductError::NotFound => AppError::NotFound(e.to_string()),
            ProductError::Validation(e) => AppError::ValidationSummary(e),
            ProductError::Conflict(msg) => AppError::Conflict(msg),
            ProductError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok(Json(ProductResponse::from(product)))
}

/// List all products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, AppError> {
    let products = state
        .products
        .list_products()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(ProductListResponse::from(products)))
}

/// Replace a product's name and price
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    JsonBody(body): JsonBody<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .products
        .update_product(&product_id, body.into())
        .await
        .map_err(|e| match e {
            ProductError::NotFound => AppError::BadRequest(e.to_string()),
            ProductError::Validation(e) => AppError::ValidationSummary(e),
            ProductError::Conflict(msg) => AppError::Conflict(msg),
            ProductError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok(Json(ProductResponse::from(product)))
}
