//! credkit WASM bridge
//!
//! Exposes credkit-core functions through a WASM-compatible ABI for JS hosts
//! (hardhat scripts, the issuer web app) and wazero. No WASI imports needed:
//! all functions are pure computation with shared memory string passing.
//!
//! # Memory Protocol
//!
//! Strings cross the WASM boundary as (ptr, len) pairs in linear memory.
//! The host allocates via [`wasm_alloc`], writes bytes, calls the function,
//! reads the result, then frees via [`wasm_free`].
//!
//! Return values pack pointer and length into a single u64:
//! `(ptr << 32) | len`
//!
//! Every export takes a JSON document and returns a JSON document; failures
//! come back as `{"error":"..."}`.

use credkit_core::{decode_chunks_json, pack_chunks_json, schema_hash_json, storage_slot_json};

// ============================================================================
// Memory management
// ============================================================================

/// Allocate `size` bytes in WASM linear memory. Returns a pointer.
/// The host must call `wasm_free` to release.
#[no_mangle]
pub extern "C" fn wasm_alloc(size: u32) -> u32 {
    let layout = match std::alloc::Layout::from_size_align(size as usize, 1) {
        Ok(l) => l,
        Err(_) => return 0,
    };
    if layout.size() == 0 {
        return 0;
    }
    let ptr = unsafe { std::alloc::alloc(layout) };
    if ptr.is_null() {
        return 0;
    }
    ptr as u32
}

/// Free a buffer previously allocated by `wasm_alloc` or returned by an
/// export function.
#[no_mangle]
pub extern "C" fn wasm_free(ptr: u32, size: u32) {
    if ptr == 0 || size == 0 {
        return;
    }
    let layout = match std::alloc::Layout::from_size_align(size as usize, 1) {
        Ok(l) => l,
        Err(_) => return,
    };
    unsafe {
        std::alloc::dealloc(ptr as *mut u8, layout);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Borrow the input bytes at (ptr, len) from WASM linear memory.
unsafe fn read_bytes<'a>(ptr: u32, len: u32) -> &'a [u8] {
    if len == 0 {
        return &[];
    }
    std::slice::from_raw_parts(ptr as *const u8, len as usize)
}

/// Write a string into newly allocated WASM memory and return packed u64.
/// The caller (host) is responsible for freeing via `wasm_free`.
fn write_result(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let len = bytes.len() as u32;
    let ptr = wasm_alloc(len);
    if ptr == 0 {
        return 0;
    }
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr as *mut u8, len as usize);
    }
    ((ptr as u64) << 32) | (len as u64)
}

/// Validate the input as UTF-8 and hand it to a JSON entry point.
fn dispatch(input: &[u8], op: fn(&str) -> String) -> String {
    match std::str::from_utf8(input) {
        Ok(json) => op(json),
        Err(e) => serde_json::json!({ "error": format!("input is not UTF-8: {e}") }).to_string(),
    }
}

// ============================================================================
// Version info
// ============================================================================

/// Get the credkit-core version. Returns a packed u64 (ptr << 32 | len)
/// pointing to a string containing the version (e.g., "0.1.0").
#[no_mangle]
pub extern "C" fn credkit_version() -> u64 {
    write_result(env!("CARGO_PKG_VERSION"))
}

// ============================================================================
// Derivations
// ============================================================================

/// Derive a namespace storage slot.
///
/// Input: `{"namespace":"..."}`
/// Output: `{"slot":"0x<64 hex>"}`
#[no_mangle]
pub extern "C" fn derive_storage_slot(ptr: u32, len: u32) -> u64 {
    let input = unsafe { read_bytes(ptr, len) };
    write_result(&dispatch(input, storage_slot_json))
}

/// Derive a credential schema hash.
///
/// Input: `{"url":"...","type":"..."}`
/// Output: `{"hash":"<32 hex>"}`
#[no_mangle]
pub extern "C" fn derive_schema_hash(ptr: u32, len: u32) -> u64 {
    let input = unsafe { read_bytes(ptr, len) };
    write_result(&dispatch(input, schema_hash_json))
}

// ============================================================================
// Chunks
// ============================================================================

/// Decode field-element chunks back into a string.
///
/// Input: `{"chunks":["<decimal or 0x>",...],"order":"big_endian"}`
/// Output: `{"text":"..."}`
#[no_mangle]
pub extern "C" fn decode_chunks(ptr: u32, len: u32) -> u64 {
    let input = unsafe { read_bytes(ptr, len) };
    write_result(&dispatch(input, decode_chunks_json))
}

/// Pack a string into field-element chunks.
///
/// Input: `{"text":"...","order":"big_endian"}`
/// Output: `{"chunks":["<decimal>",...]}`
#[no_mangle]
pub extern "C" fn pack_chunks(ptr: u32, len: u32) -> u64 {
    let input = unsafe { read_bytes(ptr, len) };
    write_result(&dispatch(input, pack_chunks_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_forwards_utf8() {
        let out = dispatch(br#"{"namespace":"example.main"}"#, storage_slot_json);
        assert!(out.contains("0x183a6125c38840424c4a85fa12bab2ab606c4b6d0e7cc73c0c06ba5300eab500"));
    }

    #[test]
    fn dispatch_rejects_invalid_utf8() {
        let out = dispatch(&[0x7b, 0xff, 0x7d], decode_chunks_json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(parsed["error"].as_str().unwrap().contains("not UTF-8"));
    }

    #[test]
    fn dispatch_surfaces_codec_errors() {
        let out = dispatch(r#"{"text":"€"}"#.as_bytes(), pack_chunks_json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(parsed["error"].as_str().unwrap().contains("above U+00FF"));
    }
}
