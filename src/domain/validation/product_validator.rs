//! Product rule set.

use crate::domain::entities::Product;

use super::notification::{ErrorCollector, ErrorRecord};
use super::strategy::{EntityKind, Validatable, ValidationStrategy};

/// Field rules for [`Product`]. Errors are tagged with the lowercase
/// `"product"` context.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductValidationStrategy;

impl ValidationStrategy<Product> for ProductValidationStrategy {
    fn validate(&self, product: &Product, collector: &mut ErrorCollector) {
        let context = EntityKind::Product.context();

        if product.id().is_empty() {
            collector.add_error(&ErrorRecord::new("Id is required", context));
        }
        if product.name().is_empty() {
            collector.add_error(&ErrorRecord::new("Name is required", context));
        }
        if product.price().is_nan() || product.price() <= 0.0 {
            collector.add_error(&ErrorRecord::new(
                "Price is required and must be greater than 0",
                context,
            ));
        }
    }
}
