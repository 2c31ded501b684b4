//! Keccak-256 hashing and the single-word ABI encoding.
//!
//! The storage-slot and schema derivations are both built from these two
//! primitives. Hashing uses the original Keccak padding (the variant Solidity's
//! `keccak256` computes), not FIPS-202 SHA3-256.

mod engine;
mod uint;

pub use engine::{encode_uint256, keccak, Digest};
pub use uint::parse_uint256;
