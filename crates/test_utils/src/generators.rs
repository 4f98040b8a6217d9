//! Property-based test data generators

use proptest::prelude::*;

use core_kernel::AccountNumber;

/// Strategy producing well-formed 10-digit mobile numbers
pub fn mobile_number_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..=9, 10)
        .prop_map(|digits| digits.into_iter().map(|d| (b'0' + d) as char).collect())
}

/// Strategy producing valid account numbers
pub fn account_number_strategy() -> impl Strategy<Value = AccountNumber> {
    (AccountNumber::MIN..AccountNumber::MAX).prop_map(AccountNumber::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn mobile_numbers_are_ten_digits(number in mobile_number_strategy()) {
            prop_assert_eq!(number.len(), 10);
            prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn account_numbers_round_trip_through_display(number in account_number_strategy()) {
            let parsed: AccountNumber = number.to_string().parse().unwrap();
            prop_assert_eq!(parsed, number);
        }
    }
}
