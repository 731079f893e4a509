//! Error type definitions for cipher operations

use thiserror::Error as ThisError;

/// Primary error type for cipher operations
///
/// Every field is `'static` so the type stays usable without an allocator.
/// `DecryptionFailed` intentionally carries no detail: a caller (or an
/// attacker observing the caller) must not learn which validation step failed.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key material of the wrong size or shape
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: &'static str,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter or parameter combination
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: &'static str,
    },

    /// Decryption or unpadding failed
    #[error("Decryption failed: {context}")]
    DecryptionFailed {
        context: &'static str,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::DecryptionFailed { .. } => Self::DecryptionFailed { context },
        }
    }

    /// True for the single opaque failure reported after decryption
    pub fn is_decryption_failure(&self) -> bool {
        matches!(self, Self::DecryptionFailed { .. })
    }
}
