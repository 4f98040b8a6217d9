//! Account DTOs
//!
//! Inputs are shape-validated here at the boundary; the provisioning
//! service receives already-validated values.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::AccountNumber;
use domain_accounts::{AccountPatch, CustomerDetails, NewCustomer, UpdateCustomerDetails};

use crate::error::ApiError;

/// A mobile number is either empty or exactly 10 digits
pub fn validate_mobile_number(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || (value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())) {
        Ok(())
    } else {
        Err(ValidationError::new("mobile_number")
            .with_message("Mobile number must be 10 digits".into()))
    }
}

/// Request body for creating a customer and account
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "Name should not be empty"))]
    pub name: String,
    #[validate(email(message = "Email address should be a valid value"))]
    pub email: String,
    #[validate(custom(function = validate_mobile_number))]
    pub mobile_number: String,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            name: request.name,
            email: request.email,
            mobile_number: request.mobile_number,
        }
    }
}

/// Query parameters selecting a customer by mobile number
#[derive(Debug, Deserialize, Validate)]
pub struct MobileNumberQuery {
    #[validate(custom(function = validate_mobile_number))]
    pub mobile_number: String,
}

/// Account fields submitted with an update
#[derive(Debug, Deserialize, Validate)]
pub struct AccountDto {
    pub account_number: i64,
    #[validate(length(min = 1, message = "Account type should not be empty"))]
    pub account_type: String,
    #[validate(length(min = 1, message = "Branch address should not be empty"))]
    pub branch_address: String,
}

/// Request body for updating customer and account details
///
/// The account sub-object is optional; omitting it makes the update a
/// no-op reported with 417 rather than an error.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "Name should not be empty"))]
    pub name: String,
    #[validate(email(message = "Email address should be a valid value"))]
    pub email: String,
    #[validate(custom(function = validate_mobile_number))]
    pub mobile_number: String,
    #[validate(nested)]
    pub account: Option<AccountDto>,
}

impl UpdateCustomerRequest {
    /// Converts into the domain update input, range-checking the account
    /// number
    pub fn into_details(self) -> Result<UpdateCustomerDetails, ApiError> {
        let account = self
            .account
            .map(|dto| {
                let account_number = AccountNumber::new(dto.account_number)
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
                Ok::<_, ApiError>(AccountPatch {
                    account_number,
                    account_type: dto.account_type,
                    branch_address: dto.branch_address,
                })
            })
            .transpose()?;

        Ok(UpdateCustomerDetails {
            name: self.name,
            email: self.email,
            mobile_number: self.mobile_number,
            account,
        })
    }
}

/// Account fields in a fetch response
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account_number: AccountNumber,
    pub account_type: String,
    pub branch_address: String,
}

/// Combined customer+account projection returned by fetch
#[derive(Debug, Serialize)]
pub struct CustomerDetailsResponse {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub account: AccountResponse,
}

impl From<CustomerDetails> for CustomerDetailsResponse {
    fn from(details: CustomerDetails) -> Self {
        Self {
            name: details.customer.name,
            email: details.customer.email,
            mobile_number: details.customer.mobile_number,
            account: AccountResponse {
                account_number: details.account.account_number,
                account_type: details.account.account_type,
                branch_address: details.account.branch_address,
            },
        }
    }
}

/// Uniform status body for create/update/delete responses
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status_code: String,
    pub status_message: String,
}

impl StatusResponse {
    pub fn new(status_code: &str, status_message: &str) -> Self {
        Self {
            status_code: status_code.to_string(),
            status_message: status_message.to_string(),
        }
    }
}
