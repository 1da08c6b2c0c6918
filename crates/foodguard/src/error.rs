//! Error types for the FoodGuard library.
//!
//! Classification itself never fails; these cover loading inputs and
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for FoodGuard operations.
#[derive(Debug, Error)]
pub enum FoodGuardError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for FoodGuard operations.
pub type Result<T> = std::result::Result<T, FoodGuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = FoodGuardError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "IO error for 'missing.json': not found");
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FoodGuardError = json_err.into();
        assert!(matches!(err, FoodGuardError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
