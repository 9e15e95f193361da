//! Customer Repository Implementation
//!
//! PostgreSQL implementation of the CustomerRepository trait.
//! Maps between the database schema and domain Customer entity.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Address, Customer, CustomerRepository, DomainError, Validatable};
use crate::shared::error::AppError;

/// Database row representation matching the customers table schema.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    street: Option<String>,
    number: Option<i32>,
    zipcode: Option<String>,
    city: Option<String>,
    active: bool,
    reward_points: i64,
}

impl CustomerRow {
    /// Rebuild the domain entity, re-running its validation and business rules.
    fn into_customer(self) -> Result<Customer, AppError> {
        let id = self.id.clone();
        self.rebuild().map_err(|e| {
            tracing::error!(customer_id = %id, error = %e, "Stored customer failed validation");
            AppError::Internal(format!("Stored customer {id} is invalid: {e}"))
        })
    }

    fn rebuild(self) -> Result<Customer, DomainError> {
        let address = match (self.street, self.number, self.city, self.zipcode) {
            (Some(street), Some(number), Some(city), Some(zip)) => {
                Some(Address::new(street, number, city, zip))
            }
            _ => None,
        };

        let mut customer = match address {
            Some(address) => Customer::with_address(self.id, self.name, address)?,
            None => Customer::new(self.id, self.name)?,
        };
        if self.active {
            customer.activate()?;
        }
        customer.add_reward_points(self.reward_points)?;

        Ok(customer)
    }
}

/// PostgreSQL customer repository implementation.
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    /// Create a new PgCustomerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), AppError> {
        let address = customer.address();

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(customer.id())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Customer with this id already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), AppError> {
        let address = customer.address();

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2,
                street = $3,
                number = $4,
                zipcode = $5,
                city = $6,
                active = $7,
                reward_points = $8,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(customer.id())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(CustomerRow::into_customer).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CustomerRow::into_customer).collect()
    }
}
