//! Port contracts shared by all persistence adapters
//!
//! Every storage capability the domain consumes is expressed as a trait
//! returning `Result<_, PortError>`. Adapters can be internal (PostgreSQL)
//! or in-memory mocks; the error surface is the same for both.

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Absence of a record is NOT an error at the port level - lookups return
/// `Option`. Ports only fail for constraint conflicts and infrastructure
/// problems; the domain layer decides what absence means.
#[derive(Debug, Error)]
pub enum PortError {
    /// The operation conflicts with existing data (uniqueness violation)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Conflict error for a duplicate field value
    pub fn duplicate(entity: &str, field: &str, value: impl fmt::Display) -> Self {
        PortError::Conflict {
            message: format!("{entity} with {field} '{value}' already exists"),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }

    /// Returns true if this error indicates a transient failure that may
    /// succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. })
    }
}

/// Marker trait for all domain ports
///
/// Port traits extend this marker so implementations are thread-safe and
/// usable from async contexts.
pub trait DomainPort: Send + Sync + 'static {}
