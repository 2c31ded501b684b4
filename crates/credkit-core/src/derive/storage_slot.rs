//! Storage slot derivation.
//!
//! `slot = keccak256(abi.encode(uint256(keccak256(name)) - 1)) & ~bytes32(uint256(0xff))`

use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};

use crate::bridge;
use crate::hash::{encode_uint256, keccak};

/// All bits set except the least-significant byte (limbs are little-endian).
const SLOT_MASK: U256 = U256::from_limbs([!0xff, u64::MAX, u64::MAX, u64::MAX]);

/// Derive the storage slot for a namespace string.
///
/// The subtraction wraps: a first digest of zero would yield 2^256 - 1.
/// That input is unreachable in practice but the wraparound is kept exact.
pub fn storage_slot(name: &str) -> B256 {
    slot_from_digest(U256::from_be_bytes(keccak(name.as_bytes()).0))
}

/// Steps after the namespace digest: decrement, re-hash the ABI word, mask.
fn slot_from_digest(first: U256) -> B256 {
    let preimage = first.wrapping_sub(U256::from(1));
    let second = U256::from_be_bytes(keccak(encode_uint256(preimage)).0);
    B256::from((second & SLOT_MASK).to_be_bytes::<32>())
}

/// Derive the storage slot and render it as `0x` + 64 lowercase hex digits.
///
/// ```rust
/// use credkit_core::derive::storage_slot_hex;
///
/// assert_eq!(
///     storage_slot_hex("openzeppelin.storage.Ownable"),
///     "0x9016d09d72d40fdae2fd8ceac6b6234c7706214fd39c1cd1e609a0528c199300"
/// );
/// ```
pub fn storage_slot_hex(name: &str) -> String {
    format!("0x{}", hex::encode(storage_slot(name)))
}

#[derive(Debug, Deserialize)]
struct SlotInput {
    namespace: String,
}

#[derive(Debug, Serialize)]
struct SlotOutput {
    slot: String,
}

/// JSON entry point for WASM bridge.
///
/// Input: `{"namespace":"..."}`
/// Output: `{"slot":"0x<64 hex>"}` or `{"error":"..."}`
pub fn storage_slot_json(input: &str) -> String {
    bridge::run(input, |parsed: SlotInput| {
        Ok(SlotOutput {
            slot: storage_slot_hex(&parsed.namespace),
        })
    })
}
