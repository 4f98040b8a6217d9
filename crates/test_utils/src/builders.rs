//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults,
//! letting tests specify only the fields they care about.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use domain_accounts::NewCustomer;

/// Builder for customer creation input
pub struct NewCustomerBuilder {
    name: String,
    email: String,
    mobile_number: String,
}

impl Default for NewCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewCustomerBuilder {
    /// Creates a builder with fake defaults and a fixed mobile number
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            email: SafeEmail().fake(),
            mobile_number: "9876543210".to_string(),
        }
    }

    /// Sets the customer name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the mobile number
    pub fn with_mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = mobile_number.into();
        self
    }

    /// Builds the creation input
    pub fn build(self) -> NewCustomer {
        NewCustomer {
            name: self.name,
            email: self.email,
            mobile_number: self.mobile_number,
        }
    }
}
