//! Keccak-256 and uint256 ABI word encoding.

use alloy_primitives::{keccak256, B256, U256};

/// 32-byte Keccak-256 digest
pub type Digest = B256;

/// Keccak-256 over `bytes`.
///
/// ```rust
/// use credkit_core::hash::keccak;
///
/// let digest = keccak(b"");
/// assert_eq!(
///     hex::encode(digest),
///     "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
/// );
/// ```
pub fn keccak(bytes: impl AsRef<[u8]>) -> Digest {
    keccak256(bytes)
}

/// ABI-encode a single `uint256` argument: the value as one 32-byte
/// big-endian word, left-padded with zeros.
pub fn encode_uint256(value: U256) -> [u8; 32] {
    value.to_be_bytes::<32>()
}
