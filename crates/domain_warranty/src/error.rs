//! Warranty domain errors
//!
//! The two business rejections carry fixed messages; callers can match on
//! the variant or show the message as-is.

use thiserror::Error;

use core_kernel::{PortError, TemporalError};

/// Errors that can occur while quoting or issuing an extended warranty
#[derive(Debug, Error)]
pub enum WarrantyError {
    /// The product code does not qualify for an extended warranty
    #[error("this product has no extended warranty coverage")]
    NoCoverage {
        code: String,
    },

    /// A warranty was already issued for this product code
    #[error("product already has an extended warranty")]
    AlreadyCovered {
        code: String,
    },

    /// The code passed the checks but the catalog has no such product
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The configured pricing or term rules are unusable
    #[error("Invalid warranty rules: {0}")]
    InvalidRules(String),

    /// The end date fell outside the representable calendar
    #[error("Calendar error: {0}")]
    Calendar(#[from] TemporalError),

    /// A collaborator store failed
    #[error("Store error: {0}")]
    Port(#[from] PortError),
}

impl WarrantyError {
    pub fn no_coverage(code: impl Into<String>) -> Self {
        WarrantyError::NoCoverage { code: code.into() }
    }

    pub fn already_covered(code: impl Into<String>) -> Self {
        WarrantyError::AlreadyCovered { code: code.into() }
    }

    /// Returns true for the two business-rule rejections
    ///
    /// Neither is worth retrying: the same input always gets the same answer.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            WarrantyError::NoCoverage { .. } | WarrantyError::AlreadyCovered { .. }
        )
    }
}
