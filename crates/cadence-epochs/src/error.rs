//! Unified error type for epoch tracking operations.
//!
//! Every failure here indicates caller misuse or a store fault, never a
//! transient condition: there is no retry concept anywhere in the tracker.

use serde::{Deserialize, Serialize};

/// Errors surfaced by the epoch tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum EpochError {
    /// Creation attempted with an identifier that already exists.
    #[error("duplicate epoch identifier: {identifier}")]
    DuplicateIdentifier {
        /// The identifier that was already registered.
        identifier: String,
    },

    /// Lookup or removal of an identifier with no record.
    #[error("epoch not found: {identifier}")]
    NotFound {
        /// The identifier that had no record.
        identifier: String,
    },

    /// Creation attempted with a non-positive duration.
    #[error("invalid epoch duration: {duration_ms}ms")]
    InvalidDuration {
        /// The rejected duration, in milliseconds.
        duration_ms: u64,
    },

    /// Creation attempted with a malformed identifier.
    #[error("invalid epoch identifier: {reason}")]
    InvalidIdentifier {
        /// Why the identifier was rejected.
        reason: String,
    },

    /// The record store failed an operation.
    #[error("storage error: {message}")]
    Storage {
        /// Description of the store fault.
        message: String,
    },
}

impl EpochError {
    /// Create a duplicate identifier error.
    pub fn duplicate_identifier(identifier: impl Into<String>) -> Self {
        Self::DuplicateIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Create an invalid duration error.
    pub fn invalid_duration(duration_ms: u64) -> Self {
        Self::InvalidDuration { duration_ms }
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            reason: reason.into(),
        }
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Standard Result type for epoch tracking operations.
pub type Result<T> = std::result::Result<T, EpochError>;
