//! Provisioning service behaviour tests
//!
//! These run against the in-memory mock stores, which enforce the same
//! uniqueness rules as the PostgreSQL schema.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use core_kernel::{AccountNumber, CustomerId};
use domain_accounts::{
    Account, AccountDefaults, AccountNumberGenerator, AccountPatch, CustomerStore,
    InMemoryAccountStore, InMemoryCustomerStore, ProvisioningError, ProvisioningService,
    RandomAccountNumberGenerator, UpdateCustomerDetails,
};
use test_utils::{customer_input, named_customer_input, NewCustomerBuilder};

fn service() -> ProvisioningService {
    ProvisioningService::new(
        Arc::new(InMemoryCustomerStore::new()),
        Arc::new(InMemoryAccountStore::new()),
        Arc::new(RandomAccountNumberGenerator),
        AccountDefaults::default(),
    )
}

/// Hands out consecutive numbers from a fixed start, so tests can force
/// collisions deterministically
struct SequentialGenerator {
    next: AtomicI64,
}

impl SequentialGenerator {
    fn starting_at(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl AccountNumberGenerator for SequentialGenerator {
    fn generate(&self) -> AccountNumber {
        AccountNumber::from_raw(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

#[tokio::test]
async fn create_then_fetch_returns_input_and_defaults() {
    let service = service();
    let input = named_customer_input("John Doe", "john@x.com", "9876543210");

    service.create(input.clone()).await.unwrap();
    let details = service.fetch("9876543210").await.unwrap();

    assert_eq!(details.customer.name, input.name);
    assert_eq!(details.customer.email, input.email);
    assert_eq!(details.customer.mobile_number, input.mobile_number);

    let defaults = AccountDefaults::default();
    assert_eq!(details.account.account_type, defaults.account_type);
    assert_eq!(details.account.branch_address, defaults.branch_address);
    assert_eq!(details.account.customer_id, details.customer.id);

    let number = details.account.account_number.as_i64();
    assert!((1_000_000_000..1_900_000_000).contains(&number));
}

#[tokio::test]
async fn duplicate_create_fails_and_leaves_pair_unchanged() {
    let service = service();
    service
        .create(customer_input("9876543210"))
        .await
        .unwrap();
    let before = service.fetch("9876543210").await.unwrap();

    let err = service
        .create(named_customer_input("Someone Else", "else@x.com", "9876543210"))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());

    let after = service.fetch("9876543210").await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn fetch_unknown_mobile_is_customer_not_found() {
    let service = service();
    let err = service.fetch("0000000000").await.unwrap_err();
    match err {
        ProvisioningError::NotFound {
            resource, field, ..
        } => {
            assert_eq!(resource, "Customer");
            assert_eq!(field, "mobileNumber");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_orphaned_customer_surfaces_account_not_found() {
    // Seed a customer directly with no account, simulating a prior
    // partial failure.
    let customers = Arc::new(InMemoryCustomerStore::new());
    customers.insert(customer_input("9876543210")).await.unwrap();

    let service = ProvisioningService::new(
        customers,
        Arc::new(InMemoryAccountStore::new()),
        Arc::new(RandomAccountNumberGenerator),
        AccountDefaults::default(),
    );

    let err = service.fetch("9876543210").await.unwrap_err();
    match err {
        ProvisioningError::NotFound { resource, .. } => assert_eq!(resource, "Account"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn update_without_account_sub_object_is_a_no_op() {
    let service = service();
    service.create(customer_input("9876543210")).await.unwrap();
    let before = service.fetch("9876543210").await.unwrap();

    let updated = service
        .update(UpdateCustomerDetails {
            name: "Completely Different".to_string(),
            email: "different@x.com".to_string(),
            mobile_number: "9876543210".to_string(),
            account: None,
        })
        .await
        .unwrap();

    assert!(!updated);
    assert_eq!(service.fetch("9876543210").await.unwrap(), before);
}

#[tokio::test]
async fn update_changes_submitted_fields_and_keeps_account_number() {
    let service = service();
    service.create(customer_input("9876543210")).await.unwrap();
    let before = service.fetch("9876543210").await.unwrap();

    let updated = service
        .update(UpdateCustomerDetails {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            mobile_number: "9876543210".to_string(),
            account: Some(AccountPatch {
                account_number: before.account.account_number,
                account_type: "Current".to_string(),
                branch_address: "45 Market Street, Chicago".to_string(),
            }),
        })
        .await
        .unwrap();
    assert!(updated);

    let after = service.fetch("9876543210").await.unwrap();
    assert_eq!(after.customer.name, "Jane Doe");
    assert_eq!(after.customer.email, "jane@x.com");
    assert_eq!(after.account.account_type, "Current");
    assert_eq!(after.account.branch_address, "45 Market Street, Chicago");
    assert_eq!(after.account.account_number, before.account.account_number);
}

#[tokio::test]
async fn update_with_unknown_account_number_is_account_not_found() {
    let service = service();
    let err = service
        .update(UpdateCustomerDetails {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            mobile_number: "9876543210".to_string(),
            account: Some(AccountPatch {
                account_number: AccountNumber::new(1_234_567_890).unwrap(),
                account_type: "Current".to_string(),
                branch_address: "45 Market Street, Chicago".to_string(),
            }),
        })
        .await
        .unwrap_err();

    match err {
        ProvisioningError::NotFound {
            resource, field, ..
        } => {
            assert_eq!(resource, "Account");
            assert_eq!(field, "accountNumber");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn update_to_taken_mobile_number_is_already_exists() {
    let service = service();
    service.create(customer_input("9876543210")).await.unwrap();
    service.create(customer_input("9876543211")).await.unwrap();
    let second = service.fetch("9876543211").await.unwrap();

    let err = service
        .update(UpdateCustomerDetails {
            name: second.customer.name.clone(),
            email: second.customer.email.clone(),
            mobile_number: "9876543210".to_string(),
            account: Some(AccountPatch {
                account_number: second.account.account_number,
                account_type: second.account.account_type.clone(),
                branch_address: second.account.branch_address.clone(),
            }),
        })
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn delete_removes_both_records() {
    let service = service();
    service.create(customer_input("9876543210")).await.unwrap();

    assert!(service.delete("9876543210").await.unwrap());

    let err = service.fetch("9876543210").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_unknown_mobile_is_customer_not_found() {
    let service = service();
    let err = service.delete("0000000000").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_tolerates_already_absent_account() {
    let customers = Arc::new(InMemoryCustomerStore::new());
    customers.insert(customer_input("9876543210")).await.unwrap();

    let service = ProvisioningService::new(
        customers,
        Arc::new(InMemoryAccountStore::new()),
        Arc::new(RandomAccountNumberGenerator),
        AccountDefaults::default(),
    );

    // Zero account rows removed is not an error.
    assert!(service.delete("9876543210").await.unwrap());
}

#[tokio::test]
async fn account_number_collision_is_retried() {
    // Pre-seed the account the sequential generator will propose first,
    // so the first insert collides and the service must draw again.
    let defaults = AccountDefaults::default();
    let taken = Account::open(
        AccountNumber::new(1_500_000_000).unwrap(),
        CustomerId::new(999),
        &defaults,
    );
    let accounts = Arc::new(InMemoryAccountStore::with_accounts(vec![taken]).await);

    let service = ProvisioningService::new(
        Arc::new(InMemoryCustomerStore::new()),
        accounts,
        Arc::new(SequentialGenerator::starting_at(1_500_000_000)),
        defaults,
    );

    service.create(customer_input("9876543210")).await.unwrap();
    let details = service.fetch("9876543210").await.unwrap();
    assert_eq!(details.account.account_number.as_i64(), 1_500_000_001);
}

#[tokio::test]
async fn exhausted_allocation_is_a_typed_failure() {
    // Every draw yields the same taken number, so all attempts collide.
    struct StuckGenerator;
    impl AccountNumberGenerator for StuckGenerator {
        fn generate(&self) -> AccountNumber {
            AccountNumber::from_raw(1_500_000_000)
        }
    }

    let defaults = AccountDefaults::default();
    let taken = Account::open(
        AccountNumber::new(1_500_000_000).unwrap(),
        CustomerId::new(999),
        &defaults,
    );
    let service = ProvisioningService::new(
        Arc::new(InMemoryCustomerStore::new()),
        Arc::new(InMemoryAccountStore::with_accounts(vec![taken]).await),
        Arc::new(StuckGenerator),
        defaults,
    );

    let err = service.create(customer_input("9876543210")).await.unwrap_err();
    assert!(matches!(
        err,
        ProvisioningError::AccountNumberExhausted { .. }
    ));
}

#[tokio::test]
async fn two_sequential_creates_same_mobile_first_wins() {
    let service = service();

    let input = NewCustomerBuilder::new()
        .with_name("John Doe")
        .with_email("john@x.com")
        .with_mobile_number("9876543210")
        .build();

    service.create(input.clone()).await.unwrap();
    let err = service.create(input).await.unwrap_err();
    assert!(err.is_already_exists());
}
