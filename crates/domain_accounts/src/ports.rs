//! Accounts Domain Ports
//!
//! Port traits for the two storage capabilities the provisioning service
//! consumes. Implementations can be internal (PostgreSQL in `infra_db`) or
//! in-memory mocks for testing.
//!
//! Lookups return `Option` and never fail for the "not found" case; only
//! the provisioning service decides that absence is an error. Inserts are
//! the atomic conditional primitive: a uniqueness violation surfaces as
//! `PortError::Conflict`, which makes the storage constraint (not the
//! service's advisory pre-check) the actual race-safety mechanism for
//! concurrent creates.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_accounts::ports::CustomerStore;
//! use std::sync::Arc;
//!
//! pub struct ProvisioningService {
//!     customers: Arc<dyn CustomerStore>,
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{AccountNumber, CustomerId, DomainPort, PortError};

use crate::account::Account;
use crate::customer::{Customer, NewCustomer};

/// Storage capability for customer records
#[async_trait]
pub trait CustomerStore: DomainPort {
    /// Looks up a customer by id
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError>;

    /// Looks up a customer by mobile number
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, PortError>;

    /// Inserts a new customer, assigning its id
    ///
    /// Mobile number uniqueness is enforced by the store; a duplicate
    /// yields `PortError::Conflict`.
    async fn insert(&self, new: NewCustomer) -> Result<Customer, PortError>;

    /// Persists changes to an existing customer
    ///
    /// Changing the mobile number to one held by another customer yields
    /// `PortError::Conflict`.
    async fn update(&self, customer: &Customer) -> Result<(), PortError>;

    /// Deletes a customer by id
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError>;
}

/// Storage capability for account records
#[async_trait]
pub trait AccountStore: DomainPort {
    /// Looks up an account by account number
    async fn find_by_number(
        &self,
        account_number: AccountNumber,
    ) -> Result<Option<Account>, PortError>;

    /// Looks up the account owned by a customer
    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Account>, PortError>;

    /// Inserts a new account
    ///
    /// A duplicate account number, or a second account for the same
    /// customer, yields `PortError::Conflict`.
    async fn insert(&self, account: &Account) -> Result<(), PortError>;

    /// Persists changes to an existing account
    async fn update(&self, account: &Account) -> Result<(), PortError>;

    /// Deletes the account rows owned by a customer
    ///
    /// Returns the number of rows removed. Zero rows is not an error; the
    /// caller decides whether that matters.
    async fn delete_by_customer_id(&self, customer_id: CustomerId) -> Result<u64, PortError>;
}

/// In-memory mock implementations for testing
///
/// These adapters enforce the same uniqueness rules as the PostgreSQL
/// schema so that service-level tests exercise the conflict paths.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of `CustomerStore`
    #[derive(Debug)]
    pub struct InMemoryCustomerStore {
        customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
        next_id: AtomicI64,
    }

    impl InMemoryCustomerStore {
        /// Creates a new empty store
        pub fn new() -> Self {
            Self {
                customers: Arc::default(),
                next_id: AtomicI64::new(1),
            }
        }
    }

    impl Default for InMemoryCustomerStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DomainPort for InMemoryCustomerStore {}

    #[async_trait]
    impl CustomerStore for InMemoryCustomerStore {
        async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, PortError> {
            Ok(self.customers.read().await.get(&id).cloned())
        }

        async fn find_by_mobile_number(
            &self,
            mobile_number: &str,
        ) -> Result<Option<Customer>, PortError> {
            Ok(self
                .customers
                .read()
                .await
                .values()
                .find(|c| c.mobile_number == mobile_number)
                .cloned())
        }

        async fn insert(&self, new: NewCustomer) -> Result<Customer, PortError> {
            let mut customers = self.customers.write().await;
            if customers
                .values()
                .any(|c| c.mobile_number == new.mobile_number)
            {
                return Err(PortError::duplicate(
                    "Customer",
                    "mobileNumber",
                    &new.mobile_number,
                ));
            }
            let id = CustomerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            let customer = Customer::from_new(id, new);
            customers.insert(id, customer.clone());
            Ok(customer)
        }

        async fn update(&self, customer: &Customer) -> Result<(), PortError> {
            let mut customers = self.customers.write().await;
            if customers
                .values()
                .any(|c| c.id != customer.id && c.mobile_number == customer.mobile_number)
            {
                return Err(PortError::duplicate(
                    "Customer",
                    "mobileNumber",
                    &customer.mobile_number,
                ));
            }
            customers.insert(customer.id, customer.clone());
            Ok(())
        }

        async fn delete_by_id(&self, id: CustomerId) -> Result<(), PortError> {
            self.customers.write().await.remove(&id);
            Ok(())
        }
    }

    /// In-memory mock implementation of `AccountStore`
    #[derive(Debug, Default)]
    pub struct InMemoryAccountStore {
        accounts: Arc<RwLock<HashMap<AccountNumber, Account>>>,
    }

    impl InMemoryAccountStore {
        /// Creates a new empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store with accounts
        pub async fn with_accounts(accounts: Vec<Account>) -> Self {
            let store = Self::new();
            for account in accounts {
                store
                    .accounts
                    .write()
                    .await
                    .insert(account.account_number, account);
            }
            store
        }
    }

    impl DomainPort for InMemoryAccountStore {}

    #[async_trait]
    impl AccountStore for InMemoryAccountStore {
        async fn find_by_number(
            &self,
            account_number: AccountNumber,
        ) -> Result<Option<Account>, PortError> {
            Ok(self.accounts.read().await.get(&account_number).cloned())
        }

        async fn find_by_customer_id(
            &self,
            customer_id: CustomerId,
        ) -> Result<Option<Account>, PortError> {
            Ok(self
                .accounts
                .read()
                .await
                .values()
                .find(|a| a.customer_id == customer_id)
                .cloned())
        }

        async fn insert(&self, account: &Account) -> Result<(), PortError> {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&account.account_number) {
                return Err(PortError::duplicate(
                    "Account",
                    "accountNumber",
                    account.account_number,
                ));
            }
            if accounts
                .values()
                .any(|a| a.customer_id == account.customer_id)
            {
                return Err(PortError::duplicate(
                    "Account",
                    "customerId",
                    account.customer_id,
                ));
            }
            accounts.insert(account.account_number, account.clone());
            Ok(())
        }

        async fn update(&self, account: &Account) -> Result<(), PortError> {
            self.accounts
                .write()
                .await
                .insert(account.account_number, account.clone());
            Ok(())
        }

        async fn delete_by_customer_id(&self, customer_id: CustomerId) -> Result<u64, PortError> {
            let mut accounts = self.accounts.write().await;
            let numbers: Vec<AccountNumber> = accounts
                .values()
                .filter(|a| a.customer_id == customer_id)
                .map(|a| a.account_number)
                .collect();
            for number in &numbers {
                accounts.remove(number);
            }
            Ok(numbers.len() as u64)
        }
    }
}
