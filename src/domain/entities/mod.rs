//! # Domain Entities
//!
//! Core domain entities. Each one validates itself on construction and on
//! every change to a validated field.
//!
//! - **Customer**: Named customer with optional address, activation state
//!   and reward points
//! - **Product**: Catalog product with a positive price
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod customer;
mod product;

pub use customer::{Customer, CustomerRepository};
pub use product::{Product, ProductRepository};

#[cfg(test)]
pub use customer::MockCustomerRepository;
#[cfg(test)]
pub use product::MockProductRepository;
