//! Repository implementations of the accounts domain ports

pub mod account;
pub mod customer;

pub use account::PostgresAccountStore;
pub use customer::PostgresCustomerStore;
