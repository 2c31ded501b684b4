//! Text to uint256 parsing.

use alloy_primitives::U256;

use crate::error::{CodecError, CodecResult};

/// Parse an unsigned 256-bit integer from decimal or `0x`-prefixed hex.
///
/// Values of 2^256 and above are rejected rather than truncated.
///
/// ```rust
/// use alloy_primitives::U256;
/// use credkit_core::hash::parse_uint256;
///
/// assert_eq!(parse_uint256("77").unwrap(), U256::from(77));
/// assert_eq!(parse_uint256("0x4d").unwrap(), U256::from(77));
/// assert!(parse_uint256("-1").is_err());
/// ```
pub fn parse_uint256(text: &str) -> CodecResult<U256> {
    let trimmed = text.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(CodecError::MalformedInteger(text.to_string()));
    }

    // Only well-formed digits reach here, so a failure means overflow
    U256::from_str_radix(digits, u64::from(radix))
        .map_err(|_| CodecError::Uint256Overflow(text.to_string()))
}
