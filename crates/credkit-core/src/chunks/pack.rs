//! Chunk packing: bytes and strings into field elements.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::{ByteOrder, CHUNK_BYTES};
use crate::bridge;
use crate::error::{CodecError, CodecResult};

/// Pack bytes into chunks of at most 31 bytes each.
///
/// Trailing segments made only of zero bytes are left out. Zero bytes at the
/// unpadded end of the final segment (its high end in big-endian order, its
/// tail in little-endian order) do not survive a decode.
pub fn pack_bytes(bytes: &[u8], order: ByteOrder) -> Vec<U256> {
    let kept = bytes
        .chunks(CHUNK_BYTES)
        .rposition(|segment| segment.iter().any(|b| *b != 0))
        .map_or(0, |last| last + 1);

    bytes
        .chunks(CHUNK_BYTES)
        .take(kept)
        .map(|segment| match order {
            ByteOrder::BigEndian => U256::from_be_slice(segment),
            ByteOrder::LittleEndian => U256::from_le_slice(segment),
        })
        .collect()
}

/// Pack a string, one byte per char.
///
/// Fails on any char above U+00FF since it has no single-byte form.
///
/// ```rust
/// use credkit_core::chunks::{decode_chunks_to_string, pack_string, ByteOrder};
///
/// let chunks = pack_string("Delhi", ByteOrder::BigEndian).unwrap();
/// assert_eq!(decode_chunks_to_string(&chunks).unwrap(), "Delhi");
/// ```
pub fn pack_string(text: &str, order: ByteOrder) -> CodecResult<Vec<U256>> {
    let bytes = text
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(ch).map_err(|_| CodecError::UnrepresentableChar { position, ch })
        })
        .collect::<CodecResult<Vec<u8>>>()?;
    Ok(pack_bytes(&bytes, order))
}

#[derive(Debug, Deserialize)]
struct PackInput {
    text: String,
    #[serde(default)]
    order: ByteOrder,
}

#[derive(Debug, Serialize)]
struct PackOutput {
    /// Decimal strings; chunk values exceed what JSON numbers hold exactly
    chunks: Vec<String>,
}

/// JSON entry point for WASM bridge.
///
/// Input: `{"text":"...","order":"big_endian"}` (order optional)
/// Output: `{"chunks":["<decimal>",...]}` or `{"error":"..."}`
pub fn pack_chunks_json(input: &str) -> String {
    bridge::run(input, |parsed: PackInput| {
        let chunks = pack_string(&parsed.text, parsed.order)?;
        Ok(PackOutput {
            chunks: chunks.iter().map(U256::to_string).collect(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunks::decode_chunks;

    #[test]
    fn empty_packs_to_nothing() {
        assert!(pack_bytes(&[], ByteOrder::BigEndian).is_empty());
        assert!(pack_bytes(&[0; 40], ByteOrder::BigEndian).is_empty());
    }

    #[test]
    fn single_char_value() {
        assert_eq!(pack_bytes(b"M", ByteOrder::BigEndian), vec![U256::from(77)]);
        assert_eq!(pack_bytes(b"M", ByteOrder::LittleEndian), vec![U256::from(77)]);
    }

    #[test]
    fn splits_at_31_bytes() {
        let chunks = pack_bytes(&[b'k'; 70], ByteOrder::BigEndian);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], chunks[1]);
        assert_eq!(chunks[2], U256::from_be_slice(&[b'k'; 8]));
    }

    #[test]
    fn trailing_zero_segment_elided() {
        let mut bytes = vec![b'a'; 31];
        bytes.extend_from_slice(&[0; 31]);
        assert_eq!(pack_bytes(&bytes, ByteOrder::BigEndian).len(), 1);
    }

    #[test]
    fn interior_zero_segment_kept() {
        let mut bytes = vec![0u8; 31];
        bytes.push(b'A');
        let chunks = pack_bytes(&bytes, ByteOrder::BigEndian);
        assert_eq!(chunks, vec![U256::ZERO, U256::from(b'A')]);
        assert_eq!(decode_chunks(&chunks, ByteOrder::BigEndian).unwrap(), bytes);
    }

    #[test]
    fn roundtrip_both_orders() {
        let text = b"https://example.com/a/fairly/long/path?q=1&r=two#frag";
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            let chunks = pack_bytes(text, order);
            assert_eq!(decode_chunks(&chunks, order).unwrap(), text.to_vec());
        }
    }

    #[test]
    fn latin1_string_packs() {
        let chunks = pack_string("caf\u{e9}", ByteOrder::BigEndian).unwrap();
        assert_eq!(chunks, vec![U256::from_be_slice(&[b'c', b'a', b'f', 0xe9])]);
    }

    #[test]
    fn wide_char_rejected() {
        assert_eq!(
            pack_string("ok\u{20ac}", ByteOrder::BigEndian),
            Err(CodecError::UnrepresentableChar {
                position: 2,
                ch: '\u{20ac}',
            })
        );
    }

    #[test]
    fn json_pack() {
        let parsed: serde_json::Value =
            serde_json::from_str(&pack_chunks_json(r#"{"text":"M"}"#)).unwrap();
        assert_eq!(parsed["chunks"], serde_json::json!(["77"]));
    }

    #[test]
    fn json_pack_wide_char() {
        let parsed: serde_json::Value =
            serde_json::from_str(&pack_chunks_json(r#"{"text":"€"}"#)).unwrap();
        assert!(parsed["error"].as_str().unwrap().contains("above U+00FF"));
    }
}
