//! WASM bindings for fiirust-base64.
//!
//! The page script passes the bytes of a selected file (or the UTF-8 bytes of
//! typed text) to `base64_encode` and either offers the returned string as a
//! `result.txt` download or shows it in a text field:
//!
//! ```js
//! import init, { base64_encode } from "./pkg/fiirust_wasm.js";
//! await init();
//! const output = base64_encode(new Uint8Array(buffer));
//! ```
//!
//! Every exported function is a single call into the codec. Decode failures
//! surface in JS as a thrown string carrying the offset and reason.
//!
//! Sizes and rejected inputs are reported as `tracing` events. This crate
//! does not install a subscriber; the embedding build must set one up (for
//! example a console-writing layer) or the events are discarded.

use fiirust_base64::{Codec, STANDARD, URL_SAFE};
use wasm_bindgen::prelude::*;

mod utils;

// ── Internal helpers ─────────────────────────────────────────────────────────

fn encode_with(codec: &Codec, input: &[u8]) -> String {
    utils::set_panic_hook();
    let output = codec.encode(input);
    tracing::debug!(input_len = input.len(), output_len = output.len(), "encoded");
    output
}

fn decode_with(codec: &Codec, input: &str) -> Result<Vec<u8>, String> {
    utils::set_panic_hook();
    match codec.decode(input) {
        Ok(output) => {
            tracing::debug!(input_len = input.len(), output_len = output.len(), "decoded");
            Ok(output)
        }
        Err(e) => {
            tracing::warn!(position = e.position(), "rejected base64 input: {e}");
            Err(e.to_string())
        }
    }
}

// ── Exports ──────────────────────────────────────────────────────────────────

/// Encode bytes (a `Uint8Array`) as standard, padded base64.
#[wasm_bindgen]
pub fn base64_encode(input: &[u8]) -> String {
    encode_with(&STANDARD, input)
}

/// Encode the UTF-8 bytes of a JS string as standard base64.
#[wasm_bindgen]
pub fn base64_encode_text(input: &str) -> String {
    encode_with(&STANDARD, input.as_bytes())
}

/// Decode standard base64 into a `Uint8Array`. Throws on malformed input.
#[wasm_bindgen]
pub fn base64_decode(input: &str) -> Result<Vec<u8>, JsValue> {
    decode_with(&STANDARD, input).map_err(|e| JsValue::from_str(&e))
}

/// Encode bytes as URL-safe base64 without padding.
#[wasm_bindgen]
pub fn base64_url_encode(input: &[u8]) -> String {
    encode_with(&URL_SAFE, input)
}

/// Decode URL-safe base64, padded or not. Throws on malformed input.
#[wasm_bindgen]
pub fn base64_url_decode(input: &str) -> Result<Vec<u8>, JsValue> {
    decode_with(&URL_SAFE, input).map_err(|e| JsValue::from_str(&e))
}
