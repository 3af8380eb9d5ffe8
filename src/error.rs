//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Field-level validation errors live in [`crate::domain::errors`];
//! the types here cover store operations and configuration loading.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on a contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A contact with the same name pair already exists
    #[error("Contact already exists: {first_name} {last_name}")]
    Duplicate {
        first_name: String,
        last_name: String,
    },

    /// No contact matched the request
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named field is not one the operation supports
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
