//! Error handling for the high-level cipher engine
//!
//! The engine reports [`rijndael_api::Error`]. Primitive errors are converted
//! on the way out; key problems are re-tagged as `InvalidKey` and every
//! failure after decryption collapses to a single `DecryptionFailed`.

// Re-export the primary API error system
pub use rijndael_api::error::{Error, Result, ResultExt};

use rijndael_algorithms::error::Error as PrimitiveError;

/// Context string reported by every failed decryption
pub const DECRYPTION_FAILED: &str = "decryption";

/// Convert a primitive error to an API error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    Error::from(err)
}

/// Convert a key-construction error, reporting it as `InvalidKey`
pub fn from_key_error(err: PrimitiveError) -> Error {
    match err {
        PrimitiveError::Parameter { reason, .. } => Error::InvalidKey {
            context: "AES key",
            message: reason,
        },
        PrimitiveError::Length { .. } => Error::InvalidKey {
            context: "AES key",
            message: "key length does not match the configured key size",
        },
        other => Error::from(other),
    }
}

/// The one error returned for any failure to validate decrypted data
pub fn decryption_failed() -> Error {
    Error::DecryptionFailed {
        context: DECRYPTION_FAILED,
    }
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self) -> Result<T>;

    /// Convert a key-construction failure to `InvalidKey`
    fn map_key_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }

    fn map_key_err(self) -> Result<T> {
        self.map_err(from_key_error)
    }
}
