//! # Domain Layer
//!
//! The domain layer contains the core business logic of the service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **validation**: Error collector, rule sets and the self-validation contract
//! - **entities**: Core domain entities (Customer, Product) and repository traits
//! - **value_objects**: Immutable value types (Address)
//! - **factories**: Entity construction with generated identifiers
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Entities validate themselves and report every violation at once
//! - Repository traits define data access contracts

pub mod entities;
pub mod error;
pub mod factories;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use error::DomainError;
pub use factories::{CustomerFactory, ProductFactory};
pub use validation::{DomainValidationError, ErrorCollector, ErrorRecord, Validatable};
pub use value_objects::*;
