//! Customer entity and repository trait.
//!
//! Maps to the `customers` table in the database schema.

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::validation::sealed::NotificationSlot;
use crate::domain::validation::{DomainValidationError, EntityRef, ErrorCollector, Validatable};
use crate::domain::value_objects::Address;
use crate::shared::error::AppError;

/// A customer record.
///
/// Every constructor and every change to `name` or `address` re-runs the
/// customer rule set. A failed change is not rolled back: the new value stays
/// on the entity and the caller receives the aggregated error.
///
/// Activation and reward points are business rules outside the rule set and
/// fail immediately with a [`DomainError`].
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
    notification: ErrorCollector,
}

impl Customer {
    /// Create an inactive customer without an address.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainValidationError> {
        Self::build(id.into(), name.into(), None)
    }

    /// Create a customer with an address, validating both in one pass.
    pub fn with_address(
        id: impl Into<String>,
        name: impl Into<String>,
        address: Address,
    ) -> Result<Self, DomainValidationError> {
        Self::build(id.into(), name.into(), Some(address))
    }

    fn build(id: String, name: String, address: Option<Address>) -> Result<Self, DomainValidationError> {
        let mut customer = Self {
            id,
            name,
            address,
            active: false,
            reward_points: 0,
            notification: ErrorCollector::new(),
        };
        customer.validate()?;
        Ok(customer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn reward_points(&self) -> i64 {
        self.reward_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Rename the customer.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainValidationError> {
        self.name = name.into();
        self.validate()
    }

    /// Replace the customer's address.
    pub fn change_address(&mut self, address: Address) -> Result<(), DomainValidationError> {
        self.address = Some(address);
        self.validate()
    }

    /// Mark the customer active. Requires an address.
    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::AddressRequiredForActivation);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Add reward points. Negative amounts are rejected.
    pub fn add_reward_points(&mut self, points: i64) -> Result<(), DomainError> {
        if points < 0 {
            return Err(DomainError::NegativeRewardPoints);
        }
        self.reward_points = self.reward_points.saturating_add(points);
        Ok(())
    }
}

impl NotificationSlot for Customer {
    fn replace_notification(&mut self, notification: ErrorCollector) {
        self.notification = notification;
    }
}

impl Validatable for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn notification(&self) -> &ErrorCollector {
        &self.notification
    }

    fn as_entity_ref(&self) -> EntityRef<'_> {
        EntityRef::Customer(self)
    }
}

/// Repository trait for Customer data access operations.
///
/// Implementations of this trait handle the actual storage interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer.
    async fn create(&self, customer: &Customer) -> Result<(), AppError>;

    /// Overwrite an existing customer. Fails with `NotFound` if absent.
    async fn update(&self, customer: &Customer) -> Result<(), AppError>;

    /// Find a customer by ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError>;

    /// All stored customers.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;
}
