//! Entity Factories
//!
//! Construct entities with freshly generated identifiers.

use uuid::Uuid;

use super::entities::{Customer, Product};
use super::validation::DomainValidationError;
use super::value_objects::Address;

fn next_id() -> String {
    Uuid::new_v4().to_string()
}

/// Factory for [`Customer`] entities.
pub struct CustomerFactory;

impl CustomerFactory {
    /// Create a customer without an address.
    pub fn create(name: impl Into<String>) -> Result<Customer, DomainValidationError> {
        Customer::new(next_id(), name)
    }

    /// Create a customer with an address in a single validation pass.
    pub fn create_with_address(
        name: impl Into<String>,
        street: impl Into<String>,
        number: i32,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Result<Customer, DomainValidationError> {
        Customer::with_address(next_id(), name, Address::new(street, number, city, zip))
    }
}

/// Factory for [`Product`] entities.
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(name: impl Into<String>, price: f64) -> Result<Product, DomainValidationError> {
        Product::new(next_id(), name, price)
    }
}
