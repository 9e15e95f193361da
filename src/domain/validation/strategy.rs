//! Validation strategies and the self-validation contract.
//!
//! The set of validated entity variants is closed, so strategy selection is a
//! plain `match` over [`EntityRef`]. Adding a variant without a rule set is a
//! compile error instead of a runtime failure.

use crate::domain::entities::{Customer, Product};

use super::customer_validator::CustomerValidationStrategy;
use super::error::DomainValidationError;
use super::notification::ErrorCollector;
use super::product_validator::ProductValidationStrategy;

/// Entity variants that carry a validation rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Product,
}

impl EntityKind {
    /// Context label attached to every error this variant produces.
    ///
    /// The casing differs between variants and is part of the external
    /// error format.
    pub const fn context(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Product => "product",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.context())
    }
}

/// Borrowed view of a validatable entity, tagged by variant.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Customer(&'a Customer),
    Product(&'a Product),
}

impl EntityRef<'_> {
    /// Variant tag of the referenced entity.
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Customer(_) => EntityKind::Customer,
            Self::Product(_) => EntityKind::Product,
        }
    }
}

/// Field-level rules for one entity type.
///
/// Strategies are stateless. They inspect the entity and append zero or more
/// records to `collector`; every rule runs, none short-circuits.
pub trait ValidationStrategy<E> {
    fn validate(&self, entity: &E, collector: &mut ErrorCollector);
}

/// Selects the rule set matching an entity's variant.
pub struct StrategyFactory;

impl StrategyFactory {
    /// Run the rule set registered for `entity`'s variant into `collector`.
    pub fn validate(entity: EntityRef<'_>, collector: &mut ErrorCollector) {
        match entity {
            EntityRef::Customer(customer) => {
                CustomerValidationStrategy.validate(customer, collector)
            }
            EntityRef::Product(product) => ProductValidationStrategy.validate(product, collector),
        }
    }
}

pub(crate) mod sealed {
    use super::ErrorCollector;

    /// Write access to an entity's collector, reachable only from this crate.
    pub trait NotificationSlot {
        /// Replace the entity's collector with the result of a new pass.
        fn replace_notification(&mut self, notification: ErrorCollector);
    }
}

/// Capability shared by every self-validating domain entity.
///
/// Implementors own exactly one [`ErrorCollector`] each. Constructors and
/// every mutation of a validated field finish by calling [`Validatable::validate`].
/// The collector can only be replaced by a validation pass; outside callers
/// cannot reach the setter:
///
/// ```compile_fail
/// use commerce_service::domain::{Customer, ErrorCollector};
///
/// let mut customer = Customer::new("1", "John").unwrap();
/// customer.replace_notification(ErrorCollector::new());
/// ```
pub trait Validatable: sealed::NotificationSlot {
    /// Entity identifier.
    fn id(&self) -> &str;

    /// Errors recorded by the last validation pass.
    fn notification(&self) -> &ErrorCollector;

    /// Tagged view used for strategy selection.
    fn as_entity_ref(&self) -> EntityRef<'_>;

    /// Run the entity's rule set.
    ///
    /// Each pass starts from an empty collector, so errors from earlier
    /// passes never linger. The field values that were validated stay in
    /// place whether or not the pass succeeds.
    fn validate(&mut self) -> Result<(), DomainValidationError> {
        let mut notification = ErrorCollector::new();
        StrategyFactory::validate(self.as_entity_ref(), &mut notification);
        sealed::NotificationSlot::replace_notification(self, notification);

        if self.notification().has_errors() {
            tracing::debug!(
                entity = %self.as_entity_ref().kind(),
                id = %self.id(),
                errors = self.notification().len(),
                "Entity validation failed"
            );
            return Err(DomainValidationError::new(self.notification().errors()));
        }

        Ok(())
    }
}
