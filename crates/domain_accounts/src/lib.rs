//! Accounts Domain
//!
//! This crate is the single source of truth for customer+account lifecycle
//! consistency. Every customer owns exactly one account, linked by the
//! customer id; the [`ProvisioningService`] orchestrates create, fetch,
//! update and delete across the two records.
//!
//! # Architecture
//!
//! The service consumes two persistence ports ([`CustomerStore`] and
//! [`AccountStore`]) and an [`AccountNumberGenerator`]. Adapters are
//! swappable: the production adapters live in `infra_db` (PostgreSQL),
//! while in-memory mocks for testing are provided behind the `mock`
//! feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_accounts::{ProvisioningService, NewCustomer, AccountDefaults};
//! use std::sync::Arc;
//!
//! let service = ProvisioningService::new(
//!     customer_store,
//!     account_store,
//!     Arc::new(RandomAccountNumberGenerator),
//!     AccountDefaults::default(),
//! );
//!
//! service.create(NewCustomer {
//!     name: "John Doe".into(),
//!     email: "john@example.com".into(),
//!     mobile_number: "9876543210".into(),
//! }).await?;
//!
//! let details = service.fetch("9876543210").await?;
//! ```

pub mod account;
pub mod config;
pub mod customer;
pub mod error;
pub mod generator;
pub mod ports;
pub mod service;

pub use account::{Account, AccountPatch};
pub use config::AccountDefaults;
pub use customer::{Customer, NewCustomer};
pub use error::ProvisioningError;
pub use generator::{AccountNumberGenerator, RandomAccountNumberGenerator};
pub use ports::{AccountStore, CustomerStore};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{InMemoryAccountStore, InMemoryCustomerStore};
pub use service::{CustomerDetails, ProvisioningService, UpdateCustomerDetails};
