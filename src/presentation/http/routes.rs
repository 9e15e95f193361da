//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(customer_routes())
        .merge(product_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Customer routes
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            post(handlers::customer::create_customer).get(handlers::customer::list_customers),
        )
        .route(
            "/customers/{id}",
            get(handlers::customer::get_customer).put(handlers::customer::update_customer),
        )
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            post(handlers::product::create_product).get(handlers::product::list_products),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product).put(handlers::product::update_product),
        )
}
