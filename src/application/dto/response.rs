//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{AddressDto, CustomerDto, ProductDto};

/// Address in responses
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub street: String,
    pub city: String,
    pub number: i32,
    pub zip: String,
}

impl From<AddressDto> for AddressResponse {
    fn from(dto: AddressDto) -> Self {
        Self {
            street: dto.street,
            city: dto.city,
            number: dto.number,
            zip: dto.zip,
        }
    }
}

/// Customer response
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressResponse>,
}

impl From<CustomerDto> for CustomerResponse {
    fn from(dto: CustomerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            address: dto.address.map(AddressResponse::from),
        }
    }
}

/// Customer list response
#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub customers: Vec<CustomerResponse>,
}

impl From<Vec<CustomerDto>> for CustomerListResponse {
    fn from(dtos: Vec<CustomerDto>) -> Self {
        Self {
            customers: dtos.into_iter().map(CustomerResponse::from).collect(),
        }
    }
}

/// Product response
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<ProductDto> for ProductResponse {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
        }
    }
}

/// Product list response
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

impl From<Vec<ProductDto>> for ProductListResponse {
    fn from(dtos: Vec<ProductDto>) -> Self {
        Self {
            products: dtos.into_iter().map(ProductResponse::from).collect(),
        }
    }
}
