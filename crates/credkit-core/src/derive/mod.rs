//! Namespace-derived identifiers.
//!
//! - [`storage_slot`]: 256-bit "unstructured storage" slot for a contract
//!   namespace, in the ERC-7201 layout (low byte cleared).
//! - [`schema_hash`]: 128-bit schema identifier for a JSON-LD context URL and
//!   a credential type name, as carried in issued claims.
//!
//! Both are pure functions of their inputs. The URL is never fetched or
//! parsed; it only contributes its UTF-8 bytes.

mod schema;
mod storage_slot;

pub use schema::{schema_hash, schema_hash_hex, SchemaHash};
pub use storage_slot::{storage_slot, storage_slot_hex};

// JSON-based entry points for WASM bridge
pub use schema::schema_hash_json;
pub use storage_slot::storage_slot_json;
