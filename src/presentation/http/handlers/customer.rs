//! Customer Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::application::dto::response::{CustomerListResponse, CustomerResponse};
use crate::application::services::CustomerError;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a new customer
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let customer = state
        .customers
        .create_customer(body.into())
        .await
        .map_err(|e| match e {
            CustomerError::Validation(e) => AppError::Validation(e),
            CustomerError::NotFound => AppError::BadRequest(e.to_string()),
            CustomerError::Conflict(msg) => AppError::Conflict(msg),
            CustomerError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

/// Get customer by ID
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customers
        .find_customer(&customer_id)
        .await
        .map_err(|e| match e {
            CustomerError::NotFound => AppError::NotFound(e.to_string()),
            CustomerError::Validation(e) => AppError::Validation(e),
            CustomerError::Conflict(msg) => AppError::Conflict(msg),
            CustomerError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok(Json(CustomerResponse::from(customer)))
}

/// List all customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<CustomerListResponse>, AppError> {
    let customers = state
        .customers
        .list_customers()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(CustomerListResponse::from(customers)))
}

/// Replace a customer's name and address
pub async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    JsonBody(body): JsonBody<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customers
        .update_customer(&customer_id, body.into())
        .await
        .map_err(|e| match e {
            // Unknown ids on update share the 400 of a rejected payload
            CustomerError::NotFound => AppError::BadRequest(e.to_string()),
            CustomerError::Validation(e) => AppError::Validation(e),
            CustomerError::Conflict(msg) => AppError::Conflict(msg),
            CustomerError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok(Json(CustomerResponse::from(customer)))
}
