//! Provisioning configuration

use serde::Deserialize;

/// Fixed values applied to every newly opened account
///
/// Injected into the provisioning service at construction; these are
/// process-wide configuration, not per-request input.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountDefaults {
    /// Account type assigned at creation
    pub account_type: String,
    /// Branch address assigned at creation
    pub branch_address: String,
}

impl Default for AccountDefaults {
    fn default() -> Self {
        Self {
            account_type: "Savings".to_string(),
            branch_address: "123 Main Street, New York".to_string(),
        }
    }
}
