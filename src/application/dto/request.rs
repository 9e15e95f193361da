//! Request DTOs
//!
//! Data structures for API request bodies. Field content is not checked
//! here; the domain entities validate it and report every violation.

use serde::Deserialize;

use crate::application::services::{
    AddressDto, CreateCustomerDto, CreateProductDto, UpdateCustomerDto, UpdateProductDto,
};

/// Address payload
#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    pub street: String,
    pub number: i32,
    pub city: String,
    pub zip: String,
}

impl From<AddressRequest> for AddressDto {
    fn from(req: AddressRequest) -> Self {
        Self {
            street: req.street,
            number: req.number,
            city: req.city,
            zip: req.zip,
        }
    }
}

/// Create customer request
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub address: AddressRequest,
}

impl From<CreateCustomerRequest> for CreateCustomerDto {
    fn from(req: CreateCustomerRequest) -> Self {
        Self {
            name: req.name,
            address: req.address.into(),
        }
    }
}

/// Update customer request
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: String,
    pub address: AddressRequest,
}

impl From<UpdateCustomerRequest> for UpdateCustomerDto {
    fn from(req: UpdateCustomerRequest) -> Self {
        Self {
            name: req.name,
            address: req.address.into(),
        }
    }
}

/// Create product request
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

impl From<CreateProductRequest> for CreateProductDto {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
        }
    }
}

/// Update product request
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
}

impl From<UpdateProductRequest> for UpdateProductDto {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_customer_request_requires_address() {
        let result = serde_json::from_str::<CreateCustomerRequest>(r#"{"name":"John"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_customer_request_into_dto() {
        let req: CreateCustomerRequest = serde_json::from_str(
            r#"{"name":"John","address":{"street":"S","number":1,"city":"C","zip":"Z"}}"#,
        )
        .unwrap();

        let dto = CreateCustomerDto::from(req);
        assert_eq!(dto.name, "John");
        assert_eq!(dto.address.number, 1);
    }
}
