//! Decoding: base64 text back to bytes.

use crate::codec::{Padding, STANDARD, URL_SAFE};
use crate::constants::PAD;
use crate::{Codec, InvalidEncoding, Reason};

impl Codec {
    /// Decodes `input` into a new byte vector.
    ///
    /// Bits of the final symbol that do not belong to an output byte are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEncoding`] if the length is impossible for this
    /// padding mode, a character is outside the alphabet, `=` is followed by
    /// another character, or there are more than two `=`.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, InvalidEncoding> {
        let bytes = input.as_bytes();
        let length = bytes.len();

        if self.padding == Padding::Required && length % 4 != 0 {
            return Err(InvalidEncoding::new(length, Reason::InvalidLength(length)));
        }

        let padding = bytes.iter().rev().take_while(|&&b| b == PAD).count();
        if padding > 2 {
            return Err(InvalidEncoding::new(
                length - padding,
                Reason::ExcessPadding(padding),
            ));
        }

        let data = &bytes[..length - padding];
        let tail_length = data.len() % 4;
        let complete = if padding > 0 {
            (data.len() + padding) % 4 == 0
        } else {
            tail_length != 1
        };
        if !complete {
            return Err(InvalidEncoding::new(length, Reason::InvalidLength(length)));
        }

        let mut out = Vec::with_capacity(data.len() / 4 * 3 + tail_length.saturating_sub(1));
        let mut chunks = data.chunks_exact(4);
        let mut offset = 0;
        for chunk in &mut chunks {
            let group = self.gather(input, chunk, offset)?;
            out.extend_from_slice(&group.to_be_bytes()[1..]);
            offset += 4;
        }

        let tail = chunks.remainder();
        if !tail.is_empty() {
            let group = self.gather(input, tail, offset)?;
            out.extend_from_slice(&group.to_be_bytes()[1..tail.len()]);
        }

        Ok(out)
    }

    /// Packs up to four symbols into the top 24 bits of a big-endian `u32`,
    /// with the first symbol in the highest position.
    fn gather(&self, input: &str, symbols: &[u8], offset: usize) -> Result<u32, InvalidEncoding> {
        let mut group = 0u32;
        for (i, &byte) in symbols.iter().enumerate() {
            let sextet = self
                .alphabet
                .sextet(byte)
                .ok_or_else(|| reject(input, offset + i))?;
            group |= u32::from(sextet) << (18 - 6 * i);
        }
        Ok(group)
    }
}

/// Builds the error for the non-alphabet character starting at `position`.
///
/// Everything before `position` is ASCII, so it falls on a char boundary.
fn reject(input: &str, position: usize) -> InvalidEncoding {
    let reason = match input.get(position..).and_then(|rest| rest.chars().next()) {
        Some('=') => Reason::MisplacedPadding,
        Some(c) => Reason::InvalidCharacter(c),
        None => Reason::InvalidLength(input.len()),
    };
    InvalidEncoding::new(position, reason)
}

/// Decodes standard, padded base64.
///
/// # Arguments
///
/// * `input` - Base64 text whose length is a multiple of 4.
///
/// # Returns
///
/// The decoded bytes, or an [`InvalidEncoding`] describing the first problem
/// found.
///
/// # Example
///
/// ```
/// use fiirust_base64::{decode, Reason};
///
/// assert_eq!(decode("TWFu").unwrap(), b"Man");
/// assert_eq!(decode("").unwrap(), b"");
///
/// let err = decode("AB=A").unwrap_err();
/// assert_eq!(err.position(), 2);
/// assert_eq!(err.reason(), Reason::MisplacedPadding);
/// ```
pub fn decode(input: &str) -> Result<Vec<u8>, InvalidEncoding> {
    STANDARD.decode(input)
}

/// Decodes URL-safe base64, with or without padding.
///
/// ```
/// use fiirust_base64::decode_url;
///
/// assert_eq!(decode_url("-_8").unwrap(), [0xFB, 0xFF]);
/// assert_eq!(decode_url("-_8=").unwrap(), [0xFB, 0xFF]);
/// ```
pub fn decode_url(input: &str) -> Result<Vec<u8>, InvalidEncoding> {
    URL_SAFE.decode(input)
}
