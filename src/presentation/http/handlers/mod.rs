//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod customer;
pub mod health;
pub mod product;
