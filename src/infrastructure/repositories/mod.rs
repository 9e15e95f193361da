//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits.
//!
//! - **PgCustomerRepository** / **PgProductRepository** - PostgreSQL storage
//! - **InMemoryCustomerRepository** / **InMemoryProductRepository** - process-local storage
//!
//! ```rust,ignore
//! use commerce_service::infrastructure::repositories::{
//!     PgCustomerRepository, PgProductRepository,
//! };
//!
//! let customers = PgCustomerRepository::new(pool.clone());
//! let products = PgProductRepository::new(pool);
//! ```

pub mod customer_repository;
pub mod in_memory;
pub mod product_repository;

pub use customer_repository::PgCustomerRepository;
pub use in_memory::{InMemoryCustomerRepository, InMemoryProductRepository};
pub use product_repository::PgProductRepository;
