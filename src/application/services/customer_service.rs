//! Customer Service
//!
//! Create, find, list and update customers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Address, Customer, CustomerFactory, CustomerRepository, DomainValidationError, Validatable,
};
use crate::shared::error::AppError;

/// Customer service trait
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Validate and store a new customer
    async fn create_customer(&self, input: CreateCustomerDto) -> Result<CustomerDto, CustomerError>;

    /// Get customer by ID
    async fn find_customer(&self, id: &str) -> Result<CustomerDto, CustomerError>;

    /// List all customers
    async fn list_customers(&self) -> Result<Vec<CustomerDto>, CustomerError>;

    /// Rename and re-address an existing customer
    async fn update_customer(
        &self,
        id: &str,
        input: UpdateCustomerDto,
    ) -> Result<CustomerDto, CustomerError>;
}

/// Address data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDto {
    pub street: String,
    pub number: i32,
    pub city: String,
    pub zip: String,
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            number: address.number(),
            city: address.city().to_string(),
            zip: address.zip().to_string(),
        }
    }
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Address::new(dto.street, dto.number, dto.city, dto.zip)
    }
}

/// Customer data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub address: Option<AddressDto>,
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            address: customer.address().map(AddressDto::from),
        }
    }
}

/// Create customer input
#[derive(Debug, Clone)]
pub struct CreateCustomerDto {
    pub name: String,
    pub address: AddressDto,
}

/// Update customer input
#[derive(Debug, Clone)]
pub struct UpdateCustomerDto {
    pub name: String,
    pub address: AddressDto,
}

/// Customer service errors
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] DomainValidationError),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// CustomerService implementation
pub struct CustomerServiceImpl<R>
where
    R: CustomerRepository + ?Sized,
{
    customer_repo: Arc<R>,
}

impl<R> CustomerServiceImpl<R>
where
    R: CustomerRepository + ?Sized,
{
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }

    async fn load(&self, id: &str) -> Result<Customer, CustomerError> {
        self.customer_repo
            .find_by_id(id)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?
            .ok_or(CustomerError::NotFound)
    }
}

#[async_trait]
impl<R> CustomerService for CustomerServiceImpl<R>
where
    R: CustomerRepository + ?Sized + 'static,
{
    async fn create_customer(&self, input: CreateCustomerDto) -> Result<CustomerDto, CustomerError> {
        let AddressDto { street, number, city, zip } = input.address;
        let customer =
            CustomerFactory::create_with_address(input.name, street, number, city, zip)
                .inspect_err(|e| tracing::info!(errors = %e, "Rejected new customer"))?;

        self.customer_repo
            .create(&customer)
            .await
            .map_err(|e| match e {
                AppError::Conflict(msg) => CustomerError::Conflict(msg),
                other => CustomerError::Internal(other.to_string()),
            })?;

        tracing::info!(customer_id = %customer.id(), "Customer created");
        Ok(CustomerDto::from(&customer))
    }

    async fn find_customer(&self, id: &str) -> Result<CustomerDto, CustomerError> {
        let customer = self.load(id).await?;
        Ok(CustomerDto::from(&customer))
    }

    async fn list_customers(&self) -> Result<Vec<CustomerDto>, CustomerError> {
        let customers = self
            .customer_repo
            .find_all()
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?;

        Ok(customers.iter().map(CustomerDto::from).collect())
    }

    async fn update_customer(
        &self,
        id: &str,
        input: UpdateCustomerDto,
    ) -> Result<CustomerDto, CustomerError> {
        let mut customer = self.load(id).await?;

        customer.change_name(input.name)?;
        customer.change_address(input.address.into())?;

        self.customer_repo
            .update(&customer)
            .await
            .map_err(|e| CustomerError::Internal(e.to_string()))?;

        tracing::info!(customer_id = %id, "Customer updated");
        Ok(CustomerDto::from(&customer))
    }
}
