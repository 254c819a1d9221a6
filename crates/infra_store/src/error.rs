//! Storage error types

use core_kernel::PortError;
use thiserror::Error;

/// Errors raised by the stores and file loaders
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store
    #[error("Entity not found: {entity} with key '{key}'")]
    NotFound { entity: &'static str, key: String },

    /// Unique key already present
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// A record breaks a store rule, such as a negative price
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A record failed field validation
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Another thread panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file is not valid JSON for its record type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a not found error for an entity type and key
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_store::StoreError;
    ///
    /// let error = StoreError::not_found("Product", "A1E2I3");
    /// assert!(error.to_string().contains("A1E2I3"));
    /// ```
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Creates a duplicate entry error
    pub fn duplicate(entity: &str, field: &str, value: impl std::fmt::Display) -> Self {
        StoreError::DuplicateEntry(format!("{} with {} '{}' already exists", entity, field, value))
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateEntry(_)
                | StoreError::ConstraintViolation(_)
                | StoreError::Validation(_)
        )
    }
}

impl From<StoreError> for PortError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { entity, key } => PortError::not_found(entity, key),
            StoreError::DuplicateEntry(message) => PortError::conflict(message),
            StoreError::ConstraintViolation(message) => PortError::validation(message),
            StoreError::Validation(errors) => PortError::validation(errors.to_string()),
            other => PortError::internal(other.to_string()),
        }
    }
}
