//! Chunk decoding: field elements back into bytes and strings.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::{check_chunks, ByteOrder, CHUNK_BYTES};
use crate::bridge;
use crate::error::CodecResult;
use crate::hash::parse_uint256;

/// Unpack chunks into the bytes they carry.
///
/// Trailing zero chunks are dropped; zero chunks before the last nonzero one
/// are kept and expand to 31 zero bytes. Every kept chunk except the last is
/// written at full width, the last at its minimal width.
pub fn decode_chunks(chunks: &[U256], order: ByteOrder) -> CodecResult<Vec<u8>> {
    check_chunks(chunks)?;

    let clean_len = chunks
        .iter()
        .rposition(|chunk| !chunk.is_zero())
        .map_or(0, |last| last + 1);

    let Some((last, body)) = chunks[..clean_len].split_last() else {
        return Ok(Vec::new());
    };

    let tail_len = last.bit_len().div_ceil(8);
    let mut out = vec![0u8; body.len() * CHUNK_BYTES + tail_len];

    let (body_out, tail_out) = out.split_at_mut(body.len() * CHUNK_BYTES);
    for (chunk, segment) in body.iter().zip(body_out.chunks_exact_mut(CHUNK_BYTES)) {
        write_segment(chunk, segment, order);
    }
    write_segment(last, tail_out, order);

    Ok(out)
}

/// Write the low `segment.len()` bytes of `value` into `segment`.
fn write_segment(value: &U256, segment: &mut [u8], order: ByteOrder) {
    let word = value.to_be_bytes::<32>();
    let src = &word[word.len() - segment.len()..];
    match order {
        ByteOrder::BigEndian => segment.copy_from_slice(src),
        ByteOrder::LittleEndian => {
            for (dst, byte) in segment.iter_mut().zip(src.iter().rev()) {
                *dst = *byte;
            }
        }
    }
}

/// Decode big-endian chunks into a string, one char per byte.
///
/// ```rust
/// use alloy_primitives::U256;
/// use credkit_core::chunks::decode_chunks_to_string;
///
/// assert_eq!(decode_chunks_to_string(&[]).unwrap(), "");
/// assert_eq!(decode_chunks_to_string(&[U256::ZERO; 3]).unwrap(), "");
/// ```
pub fn decode_chunks_to_string(chunks: &[U256]) -> CodecResult<String> {
    decode_chunks_to_string_with(chunks, ByteOrder::BigEndian)
}

/// Decode chunks into a string using an explicit byte order.
pub fn decode_chunks_to_string_with(chunks: &[U256], order: ByteOrder) -> CodecResult<String> {
    let bytes = decode_chunks(chunks, order)?;
    Ok(bytes.into_iter().map(char::from).collect())
}

/// A chunk as it arrives over JSON: small values may be plain numbers,
/// anything wider must be a decimal or `0x` string.
#[derive(Debug, Deserialize)]
#[serde(try_from = "serde_json::Value")]
enum ChunkValue {
    Number(u64),
    Text(String),
}

impl TryFrom<serde_json::Value> for ChunkValue {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => Ok(ChunkValue::Text(s)),
            serde_json::Value::Number(n) => n.as_u64().map(ChunkValue::Number).ok_or_else(|| {
                format!(
                    "chunk number {n} is not a u64; pass chunks above u64 as decimal or 0x strings"
                )
            }),
            other => Err(format!("chunk must be a number or a string, got {other}")),
        }
    }
}

impl ChunkValue {
    fn to_uint(&self) -> CodecResult<U256> {
        match self {
            ChunkValue::Number(n) => Ok(U256::from(*n)),
            ChunkValue::Text(s) => parse_uint256(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DecodeInput {
    chunks: Vec<ChunkValue>,
    #[serde(default)]
    order: ByteOrder,
}

#[derive(Debug, Serialize)]
struct DecodeOutput {
    text: String,
}

/// JSON entry point for WASM bridge.
///
/// Input: `{"chunks":[77,"0x4d","123..."],"order":"little_endian"}` (order optional)
/// Output: `{"text":"..."}` or `{"error":"..."}`
pub fn decode_chunks_json(input: &str) -> String {
    bridge::run(input, |parsed: DecodeInput| {
        let chunks = parsed
            .chunks
            .iter()
            .map(ChunkValue::to_uint)
            .collect::<CodecResult<Vec<_>>>()?;
        Ok(DecodeOutput {
            text: decode_chunks_to_string_with(&chunks, parsed.order)?,
        })
    })
}
