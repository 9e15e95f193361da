//! Product entity and repository trait.
//!
//! Maps to the `products` table in the database schema.

use async_trait::async_trait;

use crate::domain::validation::sealed::NotificationSlot;
use crate::domain::validation::{DomainValidationError, EntityRef, ErrorCollector, Validatable};
use crate::shared::error::AppError;

/// A catalog product with a name and a strictly positive price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    notification: ErrorCollector,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, DomainValidationError> {
        let mut product = Self {
            id: id.into(),
            name: name.into(),
            price,
            notification: ErrorCollector::new(),
        };
        product.validate()?;
        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainValidationError> {
        self.name = name.into();
        self.validate()
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), DomainValidationError> {
        self.price = price;
        self.validate()
    }
}

impl NotificationSlot for Product {
    fn replace_notification(&mut self, notification: ErrorCollector) {
        self.notification = notification;
    }
}

impl Validatable for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn notification(&self) -> &ErrorCollector {
        &self.notification
    }

    fn as_entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Product(self)
    }
}

/// Repository trait for Product data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product.
    async fn create(&self, product: &Product) -> Result<(), AppError>;

    /// Overwrite an existing product. Fails with `NotFound` if absent.
    async fn update(&self, product: &Product) -> Result<(), AppError>;

    /// Find a product by ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError>;

    /// All stored products.
    async fn find_all(&self) -> Result<Vec<Product>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let product = Product::new("p1", "Product 1", 100.0).unwrap();

        assert_eq!(product.id(), "p1");
        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), 100.0);
    }

    #[test]
    fn test_change_name() {
        let mut product = Product::new("p1", "Product 1", 100.0).unwrap();
        product.change_name("Product 2").unwrap();

        assert_eq!(product.name(), "Product 2");
    }

    #[test]
    fn test_change_price() {
        let mut product = Product::new("p1", "Product 1", 100.0).unwrap();
        product.change_price(150.0).unwrap();

        assert_eq!(product.price(), 150.0);
    }

    #[test]
    fn test_change_price_to_zero_keeps_value_and_fails() {
        let mut product = Product::new("p1", "Product 1", 100.0).unwrap();
        let err = product.change_price(0.0).unwrap_err();

        assert_eq!(
            err.to_string(),
            "product: Price is required and must be greater than 0"
        );
        assert_eq!(product.price(), 0.0);
    }

    #[test]
    fn test_change_name_to_empty_fails() {
        let mut product = Product::new("p1", "Product 1", 100.0).unwrap();
        let err = product.change_name("").unwrap_err();

        assert_eq!(err.first_message(), Some("Name is required"));
        assert_eq!(err.errors()[0].context, "product");
    }
}
