//! Account number generation

use rand::Rng;

use core_kernel::AccountNumber;

/// Produces candidate account numbers
///
/// Generators make no uniqueness guarantee; the account store's constraint
/// is the enforcement point and the provisioning service retries on a
/// collision.
pub trait AccountNumberGenerator: Send + Sync + 'static {
    /// Returns a new candidate account number
    fn generate(&self) -> AccountNumber;
}

/// Draws a uniformly random 10-digit number in
/// `[AccountNumber::MIN, AccountNumber::MAX)`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccountNumberGenerator;

impl AccountNumberGenerator for RandomAccountNumberGenerator {
    fn generate(&self) -> AccountNumber {
        let number = rand::rng().random_range(AccountNumber::MIN..AccountNumber::MAX);
        // In range by construction
        AccountNumber::from_raw(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_numbers_are_in_range() {
        let generator = RandomAccountNumberGenerator;
        for _ in 0..1000 {
            let number = generator.generate().as_i64();
            assert!((AccountNumber::MIN..AccountNumber::MAX).contains(&number));
        }
    }

    #[test]
    fn test_generated_numbers_have_ten_digits() {
        let generator = RandomAccountNumberGenerator;
        for _ in 0..100 {
            assert_eq!(generator.generate().to_string().len(), 10);
        }
    }
}
