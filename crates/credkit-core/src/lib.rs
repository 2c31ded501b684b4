//! credkit core codec
//!
//! Deterministic hashing and binary codecs shared by the credential issuer
//! contracts and their tooling. Everything here is pure computation, so the
//! same crate runs natively and inside the WASM bridge.
//!
//! - [`hash`] - Keccak-256 and the single-word `uint256` ABI encoding
//! - [`derive`] - storage slots for contract namespaces, schema hashes for
//!   JSON-LD credential types
//! - [`chunks`] - packing strings into 31-byte field-element chunks and back
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::U256;
//! use credkit_core::{decode_chunks_to_string, schema_hash_hex, storage_slot_hex};
//!
//! let slot = storage_slot_hex("anonaadhaar.storage.AnonAadhaarBalanceCredentialIssuer");
//! assert!(slot.ends_with("00"));
//!
//! let schema = schema_hash_hex("https://example.com/credential.jsonld", "ExampleCredential");
//! assert_eq!(schema.len(), 32);
//!
//! let gender = decode_chunks_to_string(&[U256::from(b'M')]).unwrap();
//! assert_eq!(gender, "M");
//! ```

mod bridge;

pub mod chunks;
pub mod derive;
pub mod error;
pub mod hash;

// Re-export main types at crate root
pub use chunks::{
    decode_chunks, decode_chunks_json, decode_chunks_to_string, decode_chunks_to_string_with,
    pack_bytes, pack_chunks_json, pack_string, ByteOrder, CHUNK_BITS, CHUNK_BYTES,
};
pub use derive::{
    schema_hash, schema_hash_hex, schema_hash_json, storage_slot, storage_slot_hex,
    storage_slot_json, SchemaHash,
};
pub use error::{CodecError, CodecResult};
pub use hash::{encode_uint256, keccak, parse_uint256, Digest};
