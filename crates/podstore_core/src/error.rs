//! Error types for the data accessor.

use podstore_codec::CodecError;
use podstore_kv::KvError;
use std::io;
use thiserror::Error;

/// Result type for accessor operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a data accessor.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The resource has no data or no metadata.
    #[error("resource not found: {identifier}")]
    NotFound {
        /// Path of the missing resource.
        identifier: String,
    },

    /// The request uses a feature the accessor does not support.
    #[error("not implemented: {message}")]
    NotImplemented {
        /// What is unsupported.
        message: String,
    },

    /// The backing store could not be reached or a command failed.
    #[error("backend unavailable: {message}")]
    BackendUnavailable {
        /// Description of the failure.
        message: String,
    },

    /// A stored or submitted triple could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The identifier is outside the accessor's namespace or has no parent.
    #[error("invalid identifier {identifier}: {reason}")]
    InvalidIdentifier {
        /// The rejected identifier.
        identifier: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The data stream does not match what the content type requires.
    #[error("invalid payload: {message}")]
    InvalidPayload {
        /// Description of the mismatch.
        message: String,
    },

    /// Reading a binary payload failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<KvError> for StoreError {
    fn from(err: KvError) -> Self {
        Self::BackendUnavailable {
            message: err.to_string(),
        }
    }
}

impl StoreError {
    /// Creates a not-found error.
    pub fn not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            identifier: identifier.to_string(),
        }
    }

    /// Creates a not-implemented error.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: message.into(),
        }
    }

    /// Creates a backend-unavailable error.
    pub fn backend_unavailable(message: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            message: message.into(),
        }
    }

    /// Creates an invalid-identifier error.
    pub fn invalid_identifier(identifier: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-payload error.
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    /// Returns true for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for [`StoreError::NotImplemented`].
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Returns true for [`StoreError::BackendUnavailable`].
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }
}
