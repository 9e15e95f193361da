//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Address**: Postal address owned by a customer

mod address;

pub use address::*;
