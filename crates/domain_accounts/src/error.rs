//! Accounts domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Typed failures surfaced by the provisioning service
///
/// `NotFound` covers both bad input (fetch of an unknown mobile number)
/// and invariant violations (a customer with no account); the service logs
/// the latter as consistency warnings before surfacing them.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// A customer is already registered with the given mobile number
    #[error("Customer already registered with mobile number {mobile_number}")]
    AlreadyExists { mobile_number: String },

    /// A required record is absent
    #[error("{resource} not found with {field}: '{value}'")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    /// Bounded retry of account number allocation ran out of attempts
    #[error("Could not allocate a unique account number after {attempts} attempts")]
    AccountNumberExhausted { attempts: u32 },

    /// Infrastructure failure from a persistence port
    #[error(transparent)]
    Port(#[from] PortError),
}

impl ProvisioningError {
    /// Creates a NotFound error for a resource looked up by a field value
    pub fn not_found(
        resource: &'static str,
        field: &'static str,
        value: impl std::fmt::Display,
    ) -> Self {
        ProvisioningError::NotFound {
            resource,
            field,
            value: value.to_string(),
        }
    }

    /// Returns true if this error means a required record was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProvisioningError::NotFound { .. })
    }

    /// Returns true if this error means the mobile number is taken
    pub fn is_already_exists(&self) -> bool {
        matches!(self, ProvisioningError::AlreadyExists { .. })
    }
}
