//! Base64 encoding and decoding.
//!
//! This crate provides:
//! - Standard base64 with padding ([`encode`], [`decode`])
//! - URL-safe base64 without padding ([`encode_url`], [`decode_url`])
//! - Custom alphabets and padding modes through [`Codec`]
//! - Encoding into caller-provided buffers ([`Codec::encode_to_slice`])
//!
//! All operations are pure functions of their input and are safe to call
//! from any number of threads at once.
//!
//! # Example
//!
//! ```
//! use fiirust_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod codec;
mod constants;
mod decode;
mod encode;
mod error;

pub use alphabet::Alphabet;
pub use codec::{Codec, Padding, STANDARD, URL_SAFE};
pub use constants::{PAD, STANDARD_SYMBOLS, URL_SAFE_SYMBOLS};
pub use decode::{decode, decode_url};
pub use encode::{encode, encode_url};
pub use error::{AlphabetError, EncodeSliceError, InvalidEncoding, Reason};
