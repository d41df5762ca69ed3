//! Encoding: bytes to base64 text.

use crate::codec::{Padding, STANDARD, URL_SAFE};
use crate::constants::PAD;
use crate::{Codec, EncodeSliceError};

impl Codec {
    /// Encodes `input` into a new string.
    ///
    /// Every byte sequence is encodable, so this never fails.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut out = String::with_capacity(self.encoded_len(input.len()).unwrap_or(0));
        self.encode_each(input, |symbol| out.push(char::from(symbol)));
        out
    }

    /// Encodes `input` into the front of `output` and returns the number of
    /// bytes written.
    ///
    /// # Errors
    ///
    /// Fails without writing anything if `output` is shorter than
    /// [`Codec::encoded_len`] of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use fiirust_base64::STANDARD;
    ///
    /// let mut buf = [0u8; 16];
    /// let len = STANDARD.encode_to_slice(b"hello", &mut buf).unwrap();
    /// assert_eq!(&buf[..len], b"aGVsbG8=");
    /// ```
    pub fn encode_to_slice(
        &self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, EncodeSliceError> {
        let required = self.encoded_len(input.len()).unwrap_or(usize::MAX);
        if output.len() < required {
            return Err(EncodeSliceError::OutputTooSmall {
                required,
                available: output.len(),
            });
        }
        let mut written = 0;
        self.encode_each(input, |symbol| {
            output[written] = symbol;
            written += 1;
        });
        Ok(written)
    }

    /// Feeds the encoded symbols of `input`, in order, to `emit`.
    fn encode_each(&self, input: &[u8], mut emit: impl FnMut(u8)) {
        let alphabet = &self.alphabet;
        let mut chunks = input.chunks_exact(3);
        for chunk in &mut chunks {
            let group = u32::from(chunk[0]) << 16 | u32::from(chunk[1]) << 8 | u32::from(chunk[2]);
            emit(alphabet.symbol((group >> 18) as u8));
            emit(alphabet.symbol((group >> 12) as u8));
            emit(alphabet.symbol((group >> 6) as u8));
            emit(alphabet.symbol(group as u8));
        }

        let pad = self.padding == Padding::Required;
        match *chunks.remainder() {
            [] => {}
            [o1] => {
                emit(alphabet.symbol(o1 >> 2));
                emit(alphabet.symbol((o1 & 0b11) << 4));
                if pad {
                    emit(PAD);
                    emit(PAD);
                }
            }
            [o1, o2] => {
                emit(alphabet.symbol(o1 >> 2));
                emit(alphabet.symbol((o1 & 0b11) << 4 | o2 >> 4));
                emit(alphabet.symbol((o2 & 0b1111) << 2));
                if pad {
                    emit(PAD);
                }
            }
            _ => unreachable!("chunks_exact(3) leaves at most two bytes"),
        }
    }
}

/// Encodes bytes as standard, padded base64.
///
/// # Arguments
///
/// * `input` - The bytes to encode. Text is encoded as its UTF-8 bytes.
///
/// # Returns
///
/// The base64 string; empty for empty input, otherwise a multiple of 4
/// characters long.
///
/// # Example
///
/// ```
/// use fiirust_base64::encode;
///
/// assert_eq!(encode(b"Man"), "TWFu");
/// assert_eq!(encode([0u8]), "AA==");
/// assert_eq!(encode(""), "");
/// ```
pub fn encode(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input)
}

/// Encodes bytes as URL-safe base64 without padding.
///
/// ```
/// use fiirust_base64::encode_url;
///
/// assert_eq!(encode_url([0xFB, 0xFF]), "-_8");
/// ```
pub fn encode_url(input: impl AsRef<[u8]>) -> String {
    URL_SAFE.encode(input)
}
