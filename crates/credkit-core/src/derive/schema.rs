//! Schema hash derivation.
//!
//! A credential schema is identified by `<context url>#<type name>`. Its hash
//! is the low 16 bytes of the Keccak-256 digest of that string.

use serde::{Deserialize, Serialize};

use crate::bridge;
use crate::hash::keccak;

/// 128-bit schema identifier
pub type SchemaHash = [u8; 16];

/// Separator between the context URL and the type name.
const SCHEMA_ID_SEP: &str = "#";

/// Derive the 16-byte schema hash for a JSON-LD context URL and type name.
pub fn schema_hash(url: &str, type_name: &str) -> SchemaHash {
    let schema_id = [url, SCHEMA_ID_SEP, type_name].concat();
    let digest = keccak(schema_id.as_bytes());

    let mut hash = [0u8; 16];
    hash.copy_from_slice(&digest[16..]);
    hash
}

/// Derive the schema hash as 32 lowercase hex digits, no prefix.
///
/// ```rust
/// use credkit_core::derive::schema_hash_hex;
///
/// let hash = schema_hash_hex(
///     "https://raw.githubusercontent.com/anon-aadhaar/privado-contracts/main/assets/anon-aadhaar.jsonld",
///     "AnonAadhaarCredential",
/// );
/// assert_eq!(hash, "aa754a8057de01623709bfd00c28c416");
/// ```
pub fn schema_hash_hex(url: &str, type_name: &str) -> String {
    hex::encode(schema_hash(url, type_name))
}

#[derive(Debug, Deserialize)]
struct SchemaInput {
    url: String,
    #[serde(rename = "type")]
    type_name: String,
}

#[derive(Debug, Serialize)]
struct SchemaOutput {
    hash: String,
}

/// JSON entry point for WASM bridge.
///
/// Input: `{"url":"...","type":"..."}`
/// Output: `{"hash":"<32 hex>"}` or `{"error":"..."}`
pub fn schema_hash_json(input: &str) -> String {
    bridge::run(input, |parsed: SchemaInput| {
        Ok(SchemaOutput {
            hash: schema_hash_hex(&parsed.url, &parsed.type_name),
        })
    })
}
