//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CustomerService**: Customer create/find/list/update
//! - **ProductService**: Product create/find/list/update

pub mod customer_service;
pub mod product_service;

// Re-export customer service types
pub use customer_service::{
    AddressDto, CreateCustomerDto, CustomerDto, CustomerError, CustomerService, CustomerServiceImpl,
    UpdateCustomerDto,
};

// Re-export product service types
pub use product_service::{
    CreateProductDto, ProductDto, ProductError, ProductService, ProductServiceImpl, UpdateProductDto,
};
