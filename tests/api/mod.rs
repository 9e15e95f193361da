//! API Integration Tests

mod customer_tests;
mod health_tests;
mod product_tests;
