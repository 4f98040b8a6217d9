//! Account entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountNumber, CustomerId};

use crate::config::AccountDefaults;

/// A financial account owned by exactly one customer
///
/// The account number acts as the identity. `customer_id` is a
/// back-reference to the owning customer, not an ownership edge; the
/// account is created alongside its customer and deleted with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Globally unique 10-digit account number
    pub account_number: AccountNumber,
    /// Owning customer
    pub customer_id: CustomerId,
    /// Product type, e.g. "Savings"
    pub account_type: String,
    /// Branch the account is registered at
    pub branch_address: String,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Opens a new account for a customer using the configured defaults
    ///
    /// Account type and branch address are fixed configuration values at
    /// creation time, never user-supplied.
    pub fn open(
        account_number: AccountNumber,
        customer_id: CustomerId,
        defaults: &AccountDefaults,
    ) -> Self {
        let now = Utc::now();
        Self {
            account_number,
            customer_id,
            account_type: defaults.account_type.clone(),
            branch_address: defaults.branch_address.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the mutable account fields from an update
    pub fn apply_patch(&mut self, patch: &AccountPatch) {
        self.account_type = patch.account_type.clone();
        self.branch_address = patch.branch_address.clone();
        self.updated_at = Utc::now();
    }
}

/// Account fields submitted with an update
///
/// The account number identifies the account to change; it is never
/// changed itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountPatch {
    pub account_number: AccountNumber,
    pub account_type: String,
    pub branch_address: String,
}
