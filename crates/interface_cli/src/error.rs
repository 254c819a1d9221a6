//! CLI error handling

use thiserror::Error;

use core_kernel::CoreError;
use domain_warranty::WarrantyError;
use infra_store::StoreError;

/// Exit code for a business rejection
pub const EXIT_REJECTED: u8 = 2;

/// Exit code for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine refused or failed the request
    #[error(transparent)]
    Warranty(#[from] WarrantyError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("No catalog file: pass --catalog or set WARRANTY_CATALOG_PATH")]
    MissingCatalog,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Warranty(e) if e.is_rejection() => EXIT_REJECTED,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_keep_their_message() {
        let err = CliError::from(WarrantyError::no_coverage("F01TS50"));
        assert_eq!(err.to_string(), "this product has no extended warranty coverage");
        assert_eq!(err.exit_code(), EXIT_REJECTED);

        let err = CliError::from(WarrantyError::already_covered("A1E2I3"));
        assert_eq!(err.to_string(), "product already has an extended warranty");
        assert_eq!(err.exit_code(), EXIT_REJECTED);
    }

    #[test]
    fn test_other_errors_are_failures() {
        assert_eq!(CliError::MissingCatalog.exit_code(), EXIT_FAILURE);
        let err = CliError::from(WarrantyError::ProductNotFound("A1E2I3".into()));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
