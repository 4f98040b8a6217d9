//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around the raw integer keys prevent accidental mixing
//! of customer ids and account numbers, which are both 64-bit integers at
//! the storage level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing or constructing identifiers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Invalid identifier: {0}")]
    Invalid(String),

    #[error("Account number {0} is outside the valid range")]
    OutOfRange(i64),
}

/// System-assigned customer identifier
///
/// Assigned by the customer store on insert (BIGSERIAL); never chosen by
/// callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw database key
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CustomerId> for i64 {
    fn from(id: CustomerId) -> i64 {
        id.0
    }
}

/// A 10-digit account number
///
/// Valid numbers fall in `[MIN, MAX)`. The lower bound guarantees ten
/// digits; the upper bound matches the range the generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(i64);

impl AccountNumber {
    /// Smallest valid account number (inclusive)
    pub const MIN: i64 = 1_000_000_000;
    /// Largest valid account number (exclusive)
    pub const MAX: i64 = 1_900_000_000;

    /// Constructs an account number, rejecting values outside the valid range
    pub fn new(number: i64) -> Result<Self, IdentifierError> {
        if (Self::MIN..Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(IdentifierError::OutOfRange(number))
        }
    }

    /// Constructs an account number without range checking
    ///
    /// Intended for values read back from storage, where the range was
    /// already enforced on the way in.
    pub fn from_raw(number: i64) -> Self {
        Self(number)
    }

    /// Returns the raw numeric value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .parse()
            .map_err(|_| IdentifierError::Invalid(s.to_string()))?;
        Self::new(number)
    }
}

impl From<AccountNumber> for i64 {
    fn from(number: AccountNumber) -> i64 {
        number.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_range() {
        assert!(AccountNumber::new(1_000_000_000).is_ok());
        assert!(AccountNumber::new(1_899_999_999).is_ok());
        assert_eq!(
            AccountNumber::new(1_900_000_000),
            Err(IdentifierError::OutOfRange(1_900_000_000))
        );
        assert_eq!(
            AccountNumber::new(999_999_999),
            Err(IdentifierError::OutOfRange(999_999_999))
        );
    }

    #[test]
    fn test_account_number_parsing() {
        let number: AccountNumber = "1234567890".parse().unwrap();
        assert_eq!(number.as_i64(), 1_234_567_890);
        assert!("12345".parse::<AccountNumber>().is_err());
        assert!("not-a-number".parse::<AccountNumber>().is_err());
    }

    #[test]
    fn test_customer_id_conversion() {
        let id = CustomerId::new(42);
        let raw: i64 = id.into();
        assert_eq!(raw, 42);
        assert_eq!(CustomerId::from(42), id);
    }
}
