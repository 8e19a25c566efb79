//! Custom error types for findash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Loading is fail-fast: a malformed ledger
//! row stops the run rather than silently corrupting totals.

use thiserror::Error;

/// The main error type for findash operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Ledger parse errors with row context
    #[error("Ledger error at row {row}: {message}")]
    Ledger { row: usize, message: String },

    /// Category catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Period selection errors (unparseable "Month Year" strings)
    #[error("Invalid period: {0}")]
    Period(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl DashError {
    /// Create a ledger error pinned to a CSV row (1-based, counting the header)
    pub fn ledger_row(row: usize, message: impl Into<String>) -> Self {
        Self::Ledger {
            row,
            message: message.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

}

// Implement From traits for common error types

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        Self::Ledger {
            row: err
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for findash operations
pub type DashResult<T> = Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_ledger_row_error() {
        let err = DashError::ledger_row(17, "unparseable price");
        assert_eq!(err.to_string(), "Ledger error at row 17: unparseable price");
    }

    #[test]
    fn test_not_found_error() {
        let err = DashError::category_not_found("Groceries");
        assert_eq!(err.to_string(), "Category not found: Groceries");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dash_err: DashError = io_err.into();
        assert!(matches!(dash_err, DashError::Io(_)));
    }
}
