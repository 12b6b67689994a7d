//! Centralized error types for EcoCart.

use thiserror::Error;

/// Main error type for EcoCart domain operations.
#[derive(Error, Debug)]
pub enum EcoCartError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("Listing not found: {0}")]
    ListingNotFound(u32),

    #[error("Group order not found: {0}")]
    GroupNotFound(String),

    #[error("Group order '{id}' is already full ({target} spots taken)")]
    GroupFull { id: String, target: u32 },

    #[error("'{member}' is already part of group order '{id}'")]
    AlreadyJoined { id: String, member: String },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type for EcoCart domain operations.
pub type EcoCartResult<T> = Result<T, EcoCartError>;

impl EcoCartError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
