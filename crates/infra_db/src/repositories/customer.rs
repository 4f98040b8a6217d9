//! Customer store adapter
//!
//! PostgreSQL implementation of the `CustomerStore` port. The
//! `customers_mobile_number_key` UNIQUE constraint is the race-safety
//! mechanism for concurrent creates; a violation surfaces to the domain
//! as `PortError::Conflict`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::{CustomerId, DomainPort, PortError};
use domain_accounts::{Customer, CustomerStore, NewCustomer};

use crate::error::DatabaseError;

/// PostgreSQL-backed customer store
#[derive(Debug, Clone)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    /// Creates a store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    customer_id: i64,
    name: String,
    email: String,
    mobile_number: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: CustomerId::new(row.customer_id),
            name: row.name,
            email: row.email,
            mobile_number: row.mobile_number,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl DomainPort for PostgresCustomerStore {}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT customer_id, name, email, mobile_number, created_at, updated_at
            FROM customers
            WHERE customer_id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.map(Customer::from))
    }

    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, PortError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT customer_id, name, email, mobile_number, created_at, updated_at
            FROM customers
            WHERE mobile_number = $1
            "#,
        )
        .bind(mobile_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.map(Customer::from))
    }

    async fn insert(&self, new: NewCustomer) -> Result<Customer, PortError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (name, email, mobile_number)
            VALUES ($1, $2, $3)
            RETURNING customer_id, name, email, mobile_number, created_at, updated_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.mobile_number)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.into())
    }

    async fn update(&self, customer: &Customer) -> Result<(), PortError> {
        sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, email = $3, mobile_number = $4, updated_at = $5
            WHERE customer_id = $1
            "#,
        )
        .bind(customer.id.as_i64())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.mobile_number)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError> {
        sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        Ok(())
    }
}
