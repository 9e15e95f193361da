//! In-memory repositories
//!
//! Process-local stores used when no database is configured and by the
//! HTTP integration tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Customer, CustomerRepository, Product, ProductRepository, Validatable};
use crate::shared::error::AppError;

/// Insertion-ordered map guarded by a read/write lock.
#[derive(Debug)]
struct Store<T> {
    inner: RwLock<StoreInner<T>>,
}

#[derive(Debug)]
struct StoreInner<T> {
    items: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                items: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }
}

impl<T: Clone> Store<T> {
    fn insert(&self, id: &str, item: &T) -> bool {
        let mut inner = self.inner.write();
        if inner.items.contains_key(id) {
            return false;
        }
        inner.items.insert(id.to_string(), item.clone());
        inner.order.push(id.to_string());
        true
    }

    fn replace(&self, id: &str, item: &T) -> bool {
        match self.inner.write().items.get_mut(id) {
            Some(slot) => {
                *slot = item.clone();
                true
            }
            None => false,
        }
    }

    fn get(&self, id: &str) -> Option<T> {
        self.inner.read().items.get(id).cloned()
    }

    fn all(&self) -> Vec<T> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.items.get(id).cloned())
            .collect()
    }
}

/// Customer repository backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    store: Store<Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), AppError> {
        if !self.store.insert(customer.id(), customer) {
            return Err(AppError::Conflict(
                "Customer with this id already exists".to_string(),
            ));
        }
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), AppError> {
        if !self.store.replace(customer.id(), customer) {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError> {
        Ok(self.store.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.store.all())
    }
}

/// Product repository backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    store: Store<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> Result<(), AppError> {
        if !self.store.insert(product.id(), product) {
            return Err(AppError::Conflict(
                "Product with this id already exists".to_string(),
            ));
        }
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), AppError> {
        if !self.store.replace(product.id(), product) {
            return Err(AppError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        Ok(self.store.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.store.all())
    }
}
