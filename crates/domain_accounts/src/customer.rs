//! Customer entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::CustomerId;

/// A bank customer
///
/// The mobile number is unique across all customers; the customer store
/// enforces this with a storage-level constraint. Only the provisioning
/// service mutates customers during their lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// System-assigned identifier
    pub id: CustomerId,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// 10-digit mobile number, unique per customer
    pub mobile_number: String,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Materializes a customer from creation input once the store has
    /// assigned an id
    pub fn from_new(id: CustomerId, new: NewCustomer) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: new.name,
            email: new.email,
            mobile_number: new.mobile_number,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the mutable customer fields from an update
    pub fn apply_changes(&mut self, name: String, email: String, mobile_number: String) {
        self.name = name;
        self.email = email;
        self.mobile_number = mobile_number;
        self.updated_at = Utc::now();
    }
}

/// Input for creating a customer
///
/// The id is assigned by the store; timestamps are set on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
}
