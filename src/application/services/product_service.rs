//! Product Service
//!
//! Create, find, list and update products.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DomainValidationError, Product, ProductFactory, ProductRepository, Validatable};
use crate::shared::error::AppError;

/// Product service trait
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validate and store a new product
    async fn create_product(&self, input: CreateProductDto) -> Result<ProductDto, ProductError>;

    /// Get product by ID
    async fn find_product(&self, id: &str) -> Result<ProductDto, ProductError>;

    /// List all products
    async fn list_products(&self) -> Result<Vec<ProductDto>, ProductError>;

    /// Rename and re-price an existing product
    async fn update_product(&self, id: &str, input: UpdateProductDto) -> Result<ProductDto, ProductError>;
}

/// Product data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

/// Create product input
#[derive(Debug, Clone)]
pub struct CreateProductDto {
    pub name: String,
    pub price: f64,
}

/// Update product input
#[derive(Debug, Clone)]
pub struct UpdateProductDto {
    pub name: String,
    pub price: f64,
}

/// Product service errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] DomainValidationError),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ProductService implementation
pub struct ProductServiceImpl<R>
where
    R: ProductRepository + ?Sized,
{
    product_repo: Arc<R>,
}

impl<R> ProductServiceImpl<R>
where
    R: ProductRepository + ?Sized,
{
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl<R> ProductService for ProductServiceImpl<R>
where
    R: ProductRepository + ?Sized + 'static,
{
    async fn create_product(&self, input: CreateProductDto) -> Result<ProductDto, ProductError> {
        let product = ProductFactory::create(input.name, input.price)
            .inspect_err(|e| tracing::info!(errors = %e, "Rejected new product"))?;

        self.product_repo
            .create(&product)
            .await
            .map_err(|e| match e {
                AppError::Conflict(msg) => ProductError::Conflict(msg),
                other => ProductError::Internal(other.to_string()),
            })?;

        tracing::info!(product_id = %product.id(), "Product created");
        Ok(ProductDto::from(&product))
    }

    async fn find_product(&self, id: &str) -> Result<ProductDto, ProductError> {
        let product = self
            .product_repo
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?
            .ok_or(ProductError::NotFound)?;

        Ok(ProductDto::from(&product))
    }

    async fn list_products(&self) -> Result<Vec<ProductDto>, ProductError> {
        let products = self
            .product_repo
            .find_all()
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?;

        Ok(products.iter().map(ProductDto::from).collect())
    }

    async fn update_product(&self, id: &str, input: UpdateProductDto) -> Result<ProductDto, ProductError> {
        let mut product = self
            .product_repo
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?
            .ok_or(ProductError::NotFound)?;

        product.change_name(input.name)?;
        product.change_price(input.price)?;

        self.product_repo
            .update(&product)
            .await
            .map_err(|e| ProductError::Internal(e.to_string()))?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(ProductDto::from(&product))
    }
}
