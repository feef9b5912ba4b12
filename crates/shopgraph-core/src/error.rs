//! Centralized error types for shopgraph.

use thiserror::Error;

/// Main error type for shopgraph operations.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for shopgraph operations.
pub type ShopResult<T> = Result<T, ShopError>;

impl ShopError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
