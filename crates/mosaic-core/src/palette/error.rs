//! Error types for color parsing

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not exactly six hex digits, with or without a
/// leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Wrong number of characters after stripping `#`
    #[error("invalid hex color length in {input:?} (expected 6 hex digits)")]
    InvalidLength {
        /// The rejected input
        input: String,
    },
    /// A character outside `0-9a-fA-F`
    #[error("invalid hex character in {input:?}")]
    InvalidHex {
        /// The rejected input
        input: String,
    },
}
