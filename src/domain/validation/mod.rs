//! # Domain Validation
//!
//! Self-validation machinery shared by every domain entity.
//!
//! ## Flow
//!
//! 1. An entity is constructed or one of its validated fields changes
//! 2. The entity calls [`Validatable::validate`]
//! 3. [`StrategyFactory`] picks the rule set for the entity's variant
//! 4. The strategy appends violations into a fresh [`ErrorCollector`]
//! 5. A non-empty collector becomes one [`DomainValidationError`]

mod customer_validator;
mod error;
mod notification;
mod product_validator;
mod strategy;

pub use customer_validator::CustomerValidationStrategy;
pub use error::DomainValidationError;
pub use notification::{ErrorCollector, ErrorRecord};
pub use product_validator::ProductValidationStrategy;
pub(crate) use strategy::sealed;
pub use strategy::{EntityKind, EntityRef, StrategyFactory, Validatable, ValidationStrategy};
