//! Account store adapter
//!
//! PostgreSQL implementation of the `AccountStore` port. The account
//! number is the primary key and a UNIQUE index on `customer_id` enforces
//! the one-account-per-customer pairing; both violations surface as
//! `PortError::Conflict` so the domain can retry or report.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::{AccountNumber, CustomerId, DomainPort, PortError};
use domain_accounts::{Account, AccountStore};

use crate::error::DatabaseError;

/// PostgreSQL-backed account store
#[derive(Debug, Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    /// Creates a store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    account_number: i64,
    customer_id: i64,
    account_type: String,
    branch_address: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            account_number: AccountNumber::from_raw(row.account_number),
            customer_id: CustomerId::new(row.customer_id),
            account_type: row.account_type,
            branch_address: row.branch_address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl DomainPort for PostgresAccountStore {}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn find_by_number(
        &self,
        account_number: AccountNumber,
    ) -> Result<Option<Account>, PortError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT account_number, customer_id, account_type, branch_address,
                   created_at, updated_at
            FROM accounts
            WHERE account_number = $1
            "#,
        )
        .bind(account_number.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.map(Account::from))
    }

    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Account>, PortError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT account_number, customer_id, account_type, branch_address,
                   created_at, updated_at
            FROM accounts
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.map(Account::from))
    }

    async fn insert(&self, account: &Account) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO accounts
                (account_number, customer_id, account_type, branch_address,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.account_number.as_i64())
        .bind(account.customer_id.as_i64())
        .bind(&account.account_type)
        .bind(&account.branch_address)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), PortError> {
        sqlx::query(
            r#"
            UPDATE accounts
            SET account_type = $2, branch_address = $3, updated_at = $4
            WHERE account_number = $1
            "#,
        )
        .bind(account.account_number.as_i64())
        .bind(&account.account_type)
        .bind(&account.branch_address)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(())
    }

    async fn delete_by_customer_id(&self, customer_id: CustomerId) -> Result<u64, PortError> {
        let result = sqlx::query("DELETE FROM accounts WHERE customer_id = $1")
            .bind(customer_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        Ok(result.rows_affected())
    }
}
