//! Core error types
//!
//! Abbreviation itself cannot fail. Errors are raised when a configuration
//! is validated and when a dynamic comparison value has the wrong type.

use thiserror::Error;

/// Core errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A configuration value violates a documented minimum
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A comparison value cannot be abbreviated as text
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
