//! Provisioning service
//!
//! Orchestrates the customer+account lifecycle across the two persistence
//! ports. Stateless; a single instance is shared behind `Arc` across
//! request handlers.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::CustomerId;

use crate::account::{Account, AccountPatch};
use crate::config::AccountDefaults;
use crate::customer::{Customer, NewCustomer};
use crate::error::ProvisioningError;
use crate::generator::AccountNumberGenerator;
use crate::ports::{AccountStore, CustomerStore};

/// Attempts to allocate a unique account number before giving up
const MAX_ALLOCATION_ATTEMPTS: u32 = 5;

/// Combined customer+account projection returned by `fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub customer: Customer,
    pub account: Account,
}

/// Input for updating a customer and their account
///
/// The account sub-object carries the account number that selects the pair
/// to update. Without it there is nothing to do and `update` reports
/// `false` rather than failing.
#[derive(Debug, Clone)]
pub struct UpdateCustomerDetails {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub account: Option<AccountPatch>,
}

/// The single source of truth for customer+account lifecycle consistency
///
/// Holds no in-memory state of its own; the stores are the only shared
/// mutable resource.
pub struct ProvisioningService {
    customers: Arc<dyn CustomerStore>,
    accounts: Arc<dyn AccountStore>,
    generator: Arc<dyn AccountNumberGenerator>,
    defaults: AccountDefaults,
}

impl ProvisioningService {
    /// Creates a service over the given ports and configuration
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        accounts: Arc<dyn AccountStore>,
        generator: Arc<dyn AccountNumberGenerator>,
        defaults: AccountDefaults,
    ) -> Self {
        Self {
            customers,
            accounts,
            generator,
            defaults,
        }
    }

    /// Creates a customer and opens their account
    ///
    /// The lookup is an advisory pre-check for the common duplicate case;
    /// the store's uniqueness constraint is what actually serializes two
    /// concurrent creates for the same mobile number, surfacing as a
    /// conflict that is mapped to `AlreadyExists` here.
    pub async fn create(&self, input: NewCustomer) -> Result<(), ProvisioningError> {
        if self
            .customers
            .find_by_mobile_number(&input.mobile_number)
            .await?
            .is_some()
        {
            return Err(ProvisioningError::AlreadyExists {
                mobile_number: input.mobile_number,
            });
        }

        let mobile_number = input.mobile_number.clone();
        let customer = match self.customers.insert(input).await {
            Ok(customer) => customer,
            Err(e) if e.is_conflict() => {
                return Err(ProvisioningError::AlreadyExists { mobile_number });
            }
            Err(e) => return Err(e.into()),
        };

        let account = self.open_account(customer.id).await?;
        info!(
            customer_id = %customer.id,
            account_number = %account.account_number,
            "provisioned customer and account"
        );
        Ok(())
    }

    /// Fetches the customer+account pair bound to a mobile number
    pub async fn fetch(&self, mobile_number: &str) -> Result<CustomerDetails, ProvisioningError> {
        let customer = self
            .customers
            .find_by_mobile_number(mobile_number)
            .await?
            .ok_or_else(|| ProvisioningError::not_found("Customer", "mobileNumber", mobile_number))?;

        let account = self
            .accounts
            .find_by_customer_id(customer.id)
            .await?
            .ok_or_else(|| {
                // An orphaned customer means a prior partial failure broke
                // the one-to-one invariant; surface it, never recover
                // silently.
                warn!(
                    customer_id = %customer.id,
                    "customer has no account, one-to-one invariant violated"
                );
                ProvisioningError::not_found("Account", "customerId", customer.id)
            })?;

        Ok(CustomerDetails { customer, account })
    }

    /// Updates the customer and account fields selected by an account number
    ///
    /// Returns `Ok(false)` when no account sub-object was submitted -
    /// nothing to do, deliberately distinct from an error. The account
    /// write and the customer write are sequential with no cross-write
    /// atomicity; transactional wrapping is the persistence collaborator's
    /// concern.
    pub async fn update(&self, details: UpdateCustomerDetails) -> Result<bool, ProvisioningError> {
        let Some(patch) = details.account else {
            return Ok(false);
        };

        let mut account = self
            .accounts
            .find_by_number(patch.account_number)
            .await?
            .ok_or_else(|| {
                ProvisioningError::not_found("Account", "accountNumber", patch.account_number)
            })?;

        account.apply_patch(&patch);
        self.accounts.update(&account).await?;

        let mut customer = self
            .customers
            .find_by_id(account.customer_id)
            .await?
            .ok_or_else(|| {
                warn!(
                    customer_id = %account.customer_id,
                    account_number = %account.account_number,
                    "account has no owning customer, one-to-one invariant violated"
                );
                ProvisioningError::not_found("Customer", "customerId", account.customer_id)
            })?;

        customer.apply_changes(details.name, details.email, details.mobile_number);
        match self.customers.update(&customer).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_conflict() => Err(ProvisioningError::AlreadyExists {
                mobile_number: customer.mobile_number,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the customer bound to a mobile number and their account
    ///
    /// Deleting zero account rows is accepted as normal (idempotent
    /// deletion of an already-absent account).
    pub async fn delete(&self, mobile_number: &str) -> Result<bool, ProvisioningError> {
        let customer = self
            .customers
            .find_by_mobile_number(mobile_number)
            .await?
            .ok_or_else(|| ProvisioningError::not_found("Customer", "mobileNumber", mobile_number))?;

        let removed = self.accounts.delete_by_customer_id(customer.id).await?;
        if removed == 0 {
            warn!(
                customer_id = %customer.id,
                "no account rows removed for customer, pair was already inconsistent"
            );
        }

        self.customers.delete_by_id(customer.id).await?;
        info!(customer_id = %customer.id, "deleted customer and account");
        Ok(true)
    }

    /// Opens an account for a customer, retrying on account number
    /// collisions
    ///
    /// The generator is probabilistic; the store's uniqueness constraint
    /// catches a collision and a fresh number is drawn, up to
    /// `MAX_ALLOCATION_ATTEMPTS`.
    async fn open_account(&self, customer_id: CustomerId) -> Result<Account, ProvisioningError> {
        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let number = self.generator.generate();
            let account = Account::open(number, customer_id, &self.defaults);
            match self.accounts.insert(&account).await {
                Ok(()) => return Ok(account),
                Err(e) if e.is_conflict() => {
                    warn!(
                        account_number = %number,
                        attempt,
                        "account number collision, drawing a new number"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(ProvisioningError::AccountNumberExhausted {
            attempts: MAX_ALLOCATION_ATTEMPTS,
        })
    }
}
