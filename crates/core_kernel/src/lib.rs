//! Core Kernel - Foundational types for the bank accounts service
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure layers:
//! - Strongly-typed identifiers for customers and accounts
//! - The common `PortError` type used by all persistence ports

pub mod identifiers;
pub mod ports;

pub use identifiers::{AccountNumber, CustomerId, IdentifierError};
pub use ports::{DomainPort, PortError};
