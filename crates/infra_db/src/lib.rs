//! Infrastructure Database Layer
//!
//! PostgreSQL adapters for the accounts service, implementing the
//! persistence port traits from `domain_accounts` using SQLx.
//!
//! The schema (see `migrations/0001_init.sql` at the workspace root)
//! carries the constraints the domain relies on for race safety:
//! a UNIQUE constraint on the customer mobile number, the account number
//! as primary key, and a UNIQUE index on the account's customer id for
//! the one-to-one pairing.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PostgresCustomerStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/bank")).await?;
//! let customers = PostgresCustomerStore::new(pool.clone());
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{PostgresAccountStore, PostgresCustomerStore};
