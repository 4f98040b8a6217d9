//! Pre-built test data for common entities

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use domain_accounts::NewCustomer;

/// Creation input with fake name/email and the given mobile number
pub fn customer_input(mobile_number: &str) -> NewCustomer {
    NewCustomer {
        name: Name().fake(),
        email: SafeEmail().fake(),
        mobile_number: mobile_number.to_string(),
    }
}

/// Creation input with every field pinned
pub fn named_customer_input(name: &str, email: &str, mobile_number: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        email: email.to_string(),
        mobile_number: mobile_number.to_string(),
    }
}
