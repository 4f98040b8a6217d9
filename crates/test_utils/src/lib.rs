//! Test Utilities Crate
//!
//! Shared test infrastructure for the accounts service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built creation inputs and entities
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data strategies

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::*;
pub use fixtures::*;
pub use generators::*;
