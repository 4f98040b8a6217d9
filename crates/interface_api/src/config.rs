//! API configuration

use serde::{Deserialize, Serialize};

use domain_accounts::AccountDefaults;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Account type assigned to newly opened accounts
    pub default_account_type: String,
    /// Branch address assigned to newly opened accounts
    pub default_branch_address: String,
    /// Contact block served at /contact-info
    #[serde(default)]
    pub contact: ContactInfo,
}

/// Contact information exposed for operational support
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub message: String,
    pub name: String,
    pub email: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            message: "Welcome to the accounts service, reach out in case of any issues".to_string(),
            name: "Accounts Service Team".to_string(),
            email: "accounts-support@openbank.example".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/bank".to_string(),
            log_level: "info".to_string(),
            default_account_type: "Savings".to_string(),
            default_branch_address: "123 Main Street, New York".to_string(),
            contact: ContactInfo::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the account defaults injected into the provisioning service
    pub fn account_defaults(&self) -> AccountDefaults {
        AccountDefaults {
            account_type: self.default_account_type.clone(),
            branch_address: self.default_branch_address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_provisioning_defaults() {
        let config = ApiConfig::default();
        let defaults = config.account_defaults();
        assert_eq!(defaults.account_type, "Savings");
        assert_eq!(defaults.branch_address, "123 Main Street, New York");
    }

    #[test]
    fn test_server_addr() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
