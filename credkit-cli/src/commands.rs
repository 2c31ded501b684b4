//! Subcommand implementations.
//!
//! Each command returns the text to print on stdout so the binary stays a thin
//! shell around these functions.

use alloy_primitives::U256;
use clap::ValueEnum;
use credkit_core::{
    decode_chunks_to_string_with, encode_uint256, keccak, pack_string, parse_uint256,
    schema_hash_hex, storage_slot_hex, ByteOrder, CodecResult,
};
use serde_json::json;
use tracing::debug;

/// Byte order as spelled on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Big-endian segments
    #[default]
    Be,
    /// Little-endian segments (circuit revealed fields)
    Le,
}

impl From<OrderArg> for ByteOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Be => ByteOrder::BigEndian,
            OrderArg::Le => ByteOrder::LittleEndian,
        }
    }
}

pub fn keccak_text(text: &str, as_json: bool) -> String {
    let digest = format!("0x{}", hex::encode(keccak(text.as_bytes())));
    if as_json {
        json!({ "digest": digest }).to_string()
    } else {
        digest
    }
}

pub fn encode_uint(value: &str, as_json: bool) -> CodecResult<String> {
    let value = parse_uint256(value)?;
    let word = format!("0x{}", hex::encode(encode_uint256(value)));
    Ok(if as_json {
        json!({ "encoded": word }).to_string()
    } else {
        word
    })
}

pub fn slot(namespace: &str, as_json: bool) -> String {
    debug!(namespace, "deriving storage slot");
    let slot = storage_slot_hex(namespace);
    if as_json {
        json!({ "slot": slot }).to_string()
    } else {
        slot
    }
}

pub fn schema(url: &str, type_name: &str, as_json: bool) -> String {
    debug!(url, type_name, "deriving schema hash");
    let hash = schema_hash_hex(url, type_name);
    if as_json {
        json!({ "hash": hash }).to_string()
    } else {
        hash
    }
}

pub fn decode(chunks: &[String], order: OrderArg, as_json: bool) -> CodecResult<String> {
    let values = chunks
        .iter()
        .map(|c| parse_uint256(c))
        .collect::<CodecResult<Vec<U256>>>()?;
    debug!(count = values.len(), ?order, "decoding chunks");

    let text = decode_chunks_to_string_with(&values, order.into())?;
    Ok(if as_json {
        json!({ "text": text }).to_string()
    } else {
        text
    })
}

pub fn pack(text: &str, order: OrderArg, as_json: bool) -> CodecResult<String> {
    let chunks: Vec<String> = pack_string(text, order.into())?
        .iter()
        .map(U256::to_string)
        .collect();
    debug!(count = chunks.len(), ?order, "packed chunks");

    Ok(if as_json {
        json!({ "chunks": chunks }).to_string()
    } else {
        chunks.join("\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keccak_plain_and_json() {
        let plain = keccak_text("abc", false);
        assert_eq!(
            plain,
            "0x4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
        let parsed: serde_json::Value = serde_json::from_str(&keccak_text("abc", true)).unwrap();
        assert_eq!(parsed["digest"], plain);
    }

    #[test]
    fn encode_uint_pads_to_one_word() {
        assert_eq!(
            encode_uint("255", false).unwrap(),
            format!("0x{}ff", "0".repeat(62))
        );
        assert!(encode_uint("0x1", true).unwrap().contains("\"encoded\""));
    }

    #[test]
    fn encode_uint_rejects_overflow() {
        let too_big = format!("0x1{}", "0".repeat(64));
        assert!(encode_uint(&too_big, false).is_err());
    }

    #[test]
    fn slot_matches_erc7201_example() {
        assert_eq!(
            slot("example.main", false),
            "0x183a6125c38840424c4a85fa12bab2ab606c4b6d0e7cc73c0c06ba5300eab500"
        );
    }

    #[test]
    fn schema_json_shape() {
        let parsed: serde_json::Value = serde_json::from_str(&schema(
            "https://schema.iden3.io/core/jsonld/auth.jsonld",
            "AuthBJJCredential",
            true,
        ))
        .unwrap();
        assert_eq!(parsed["hash"], "cca3371a6cb1b715004407e325bd993c");
    }

    #[test]
    fn decode_little_endian_field() {
        let chunks = vec!["452723500356".to_string(), "0".to_string()];
        assert_eq!(decode(&chunks, OrderArg::Le, false).unwrap(), "Delhi");
    }

    #[test]
    fn decode_nothing() {
        assert_eq!(decode(&[], OrderArg::Be, false).unwrap(), "");
    }

    #[test]
    fn decode_rejects_malformed_chunk() {
        let chunks = vec!["12z".to_string()];
        assert!(decode(&chunks, OrderArg::Be, false).is_err());
    }

    #[test]
    fn pack_then_decode() {
        let text = "Anon Aadhaar Balance Credential Issuer v1.0 (test)";
        let packed = pack(text, OrderArg::Be, false).unwrap();
        let chunks: Vec<String> = packed.lines().map(str::to_string).collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(decode(&chunks, OrderArg::Be, false).unwrap(), text);
    }

    #[test]
    fn order_arg_maps_to_byte_order() {
        assert_eq!(ByteOrder::from(OrderArg::default()), ByteOrder::BigEndian);
        assert_eq!(ByteOrder::from(OrderArg::Le), ByteOrder::LittleEndian);
    }
}
