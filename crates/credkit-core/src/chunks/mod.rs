//! Field-element string chunks.
//!
//! Circuits carry strings as a sequence of field elements, each holding at
//! most 31 bytes so it stays below the field modulus. Every chunk except the
//! last is a full 31-byte segment; the last holds the remainder. Trailing
//! chunks that are entirely zero are dropped (or arrive as zero padding up
//! to a fixed chunk count).
//!
//! [`decode_chunks`] reverses that packing and [`pack_bytes`] performs it.
//! Characters map one-to-one onto bytes (Latin-1). Multi-byte UTF-8 content
//! comes back as its individual bytes, not re-decoded.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::U256;
//! use credkit_core::chunks::decode_chunks_to_string;
//!
//! let text = decode_chunks_to_string(&[U256::from(b'M')]).unwrap();
//! assert_eq!(text, "M");
//! ```

mod decode;
mod pack;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

pub use decode::{decode_chunks, decode_chunks_to_string, decode_chunks_to_string_with};
pub use pack::{pack_bytes, pack_string};

// JSON-based entry points for WASM bridge
pub use decode::decode_chunks_json;
pub use pack::pack_chunks_json;

/// Bytes carried by one full chunk.
pub const CHUNK_BYTES: usize = 31;

/// Bit width bound of a chunk value.
pub const CHUNK_BITS: usize = CHUNK_BYTES * 8;

/// Byte order of the segment inside each chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// First byte of the segment is the most significant byte of the chunk.
    /// Non-final chunks are zero-padded on the left.
    #[default]
    BigEndian,
    /// First byte of the segment is the least significant byte of the chunk,
    /// as the credential circuit packs its revealed fields. Non-final chunks
    /// are zero-padded on the right.
    LittleEndian,
}

/// Reject any chunk that does not fit in 31 bytes.
pub(crate) fn check_chunks(chunks: &[U256]) -> CodecResult<()> {
    match chunks
        .iter()
        .enumerate()
        .find(|(_, value)| value.bit_len() > CHUNK_BITS)
    {
        Some((index, value)) => Err(CodecError::ChunkOverflow {
            index,
            value: value.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_chunk_fits() {
        let max = (U256::from(1) << CHUNK_BITS) - U256::from(1);
        assert!(check_chunks(&[U256::ZERO, max]).is_ok());
    }

    #[test]
    fn overflow_reports_index() {
        let too_big = U256::from(1) << CHUNK_BITS;
        assert_eq!(
            check_chunks(&[U256::from(1), too_big]),
            Err(CodecError::ChunkOverflow {
                index: 1,
                value: too_big.to_string(),
            })
        );
    }

    #[test]
    fn byte_order_serde_names() {
        assert_eq!(
            serde_json::to_string(&ByteOrder::LittleEndian).unwrap(),
            r#""little_endian""#
        );
        let order: ByteOrder = serde_json::from_str(r#""big_endian""#).unwrap();
        assert_eq!(order, ByteOrder::BigEndian);
    }
}
