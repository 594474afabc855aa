//! Error types for the dominance library

use thiserror::Error;

/// Result type alias for quantization operations
pub type Result<T> = std::result::Result<T, QuantizeError>;

/// Errors raised by the color quantizer.
///
/// All misuse of the quantizer surfaces as [`QuantizeError::InvalidInput`]
/// before any computation begins; the quantization itself is pure arithmetic
/// and cannot fail partway through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantizeError {
    /// The inputs cannot produce a meaningful clustering
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl QuantizeError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
