//! Codec error types

use thiserror::Error;

/// Errors raised by the codec.
///
/// Every variant is a rejected argument: the computations themselves are
/// total, so a failure always points at malformed input and never at a
/// transient condition worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Integer does not fit in 256 bits
    #[error("value does not fit in 256 bits: {0}")]
    Uint256Overflow(String),

    /// Text is not a decimal or 0x-prefixed hexadecimal integer
    #[error("malformed unsigned integer: '{0}'")]
    MalformedInteger(String),

    /// Chunk value is 2^248 or larger
    #[error("chunk {index} does not fit in 31 bytes: {value}")]
    ChunkOverflow { index: usize, value: String },

    /// Character outside the single-byte range cannot be packed
    #[error("character {ch:?} at position {position} is above U+00FF")]
    UnrepresentableChar { position: usize, ch: char },

    /// JSON bridge input could not be parsed
    #[error("invalid JSON input: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::InvalidJson(e.to_string())
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
