//! Ports and Adapters Infrastructure
//!
//! The warranty engine never talks to storage directly. Each collaborator is a
//! port trait defined in the domain crate; adapters (in-memory, file-backed, or a
//! database in a larger deployment) implement those traits and report failures
//! through the single `PortError` type defined here.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │          WarrantyService (engine)        │
//! └──────────────────────────────────────────┘
//!        │               │              │
//!        ▼               ▼              ▼
//!  ProductPort     WarrantyPort    TimeProvider
//!        ▲               ▲
//!        │               │
//!  ┌─────┴───────────────┴─────┐
//!  │  infra_store adapters     │
//!  └───────────────────────────┘
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// ensuring consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with key {key}")]
    NotFound {
        entity_type: String,
        key: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
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
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, key: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            key: key.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error reports a uniqueness violation
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so a single adapter instance can be
/// shared behind an `Arc` by every caller.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Product", "A1E2I3");
        assert!(error.is_not_found());
        assert!(!error.is_conflict());
        assert_eq!(error.to_string(), "Not found: Product with key A1E2I3");
    }

    #[test]
    fn test_port_error_conflict() {
        let error = PortError::conflict("warranty already stored for A1E2I3");
        assert!(error.is_conflict());
        assert!(error.to_string().contains("A1E2I3"));
    }

    #[test]
    fn test_port_error_validation_field() {
        let error = PortError::validation_field("price must not be negative", "price");
        match error {
            PortError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("price")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
