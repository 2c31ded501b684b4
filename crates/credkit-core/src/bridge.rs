//! Shared plumbing for the JSON entry points.
//!
//! Every `*_json` function takes a JSON document and returns a JSON document.
//! Failures never escape as `Err`: they come back as `{"error":"..."}` so the
//! host side only has to inspect one shape.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CodecError, CodecResult};

/// Run `op` over the parsed input and serialize whatever it returns.
pub(crate) fn run<I, O, F>(input: &str, op: F) -> String
where
    I: DeserializeOwned,
    O: Serialize,
    F: FnOnce(I) -> CodecResult<O>,
{
    let result = serde_json::from_str::<I>(input)
        .map_err(CodecError::from)
        .and_then(op);

    match result {
        Ok(output) => match serde_json::to_string(&output) {
            Ok(json) => json,
            Err(e) => error(&format!("serialization failed: {e}")),
        },
        Err(e) => error(&e.to_string()),
    }
}

/// Encode an error message as `{"error":"..."}` with proper escaping.
pub(crate) fn error(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}
