//! Core error types used across the system

use thiserror::Error;
use crate::ports::PortError;
use crate::temporal::TemporalError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Port error: {0}")]
    Port(#[from] PortError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_error_converts() {
        let err: CoreError = TemporalError::UnknownTimezone("Mars/Olympus".to_string()).into();
        assert!(matches!(err, CoreError::Temporal(_)));
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn test_port_error_converts() {
        let err: CoreError = PortError::not_found("Product", "ABC").into();
        assert!(err.to_string().starts_with("Port error: Not found"));
    }

    #[test]
    fn test_configuration_message() {
        let err = CoreError::configuration("missing catalog path");
        assert_eq!(err.to_string(), "Configuration error: missing catalog path");
    }
}
