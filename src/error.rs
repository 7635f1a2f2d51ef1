//! Library error model.

use thiserror::Error;

/// Result type used across the listing library.
pub type ListingResult<T> = Result<T, ListingError>;

/// Failures at the library boundary.
///
/// Filtering and generation never fail; these cover parsing user-supplied
/// text, id lookups, and rejecting a generator configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("unknown BER rating: {0}")]
    UnknownBerRating(String),

    #[error("unknown listing status: {0}")]
    UnknownStatus(String),

    /// No listing carries the requested id.
    #[error("listing not found: {0}")]
    NotFound(String),

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

impl ListingError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
