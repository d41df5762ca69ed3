//! Codec configuration: an alphabet paired with a padding mode.

use crate::Alphabet;

/// Whether `=` padding is written and expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Padding {
    /// Encoded output is padded to a multiple of 4 and decoding rejects any
    /// other length.
    #[default]
    Required,
    /// Encoded output is not padded. Decoding accepts unpadded input as well
    /// as input carrying correct padding.
    Omitted,
}

/// A base64 codec for one alphabet and padding mode.
///
/// Codecs hold no mutable state; the same value can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    pub(crate) alphabet: Alphabet,
    pub(crate) padding: Padding,
}

/// Standard alphabet with padding.
pub const STANDARD: Codec = Codec::new(Alphabet::STANDARD, Padding::Required);

/// URL-safe alphabet without padding.
pub const URL_SAFE: Codec = Codec::new(Alphabet::URL_SAFE, Padding::Omitted);

impl Codec {
    pub const fn new(alphabet: Alphabet, padding: Padding) -> Self {
        Self { alphabet, padding }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Number of bytes produced by encoding `len` input bytes, or `None` if
    /// that does not fit in a `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use fiirust_base64::{STANDARD, URL_SAFE};
    ///
    /// assert_eq!(STANDARD.encoded_len(4), Some(8));
    /// assert_eq!(URL_SAFE.encoded_len(4), Some(6));
    /// ```
    pub fn encoded_len(&self, len: usize) -> Option<usize> {
        let full = (len / 3).checked_mul(4)?;
        let tail = match (len % 3, self.padding) {
            (0, _) => 0,
            (_, Padding::Required) => 4,
            (rem, Padding::Omitted) => rem + 1,
        };
        full.checked_add(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_padded() {
        let lens: Vec<_> = (0..8).map(|n| STANDARD.encoded_len(n)).collect();
        assert_eq!(lens, [0, 4, 4, 4, 8, 8, 8, 12].map(Some).to_vec());
    }

    #[test]
    fn encoded_len_unpadded() {
        let lens: Vec<_> = (0..8).map(|n| URL_SAFE.encoded_len(n)).collect();
        assert_eq!(lens, [0, 2, 3, 4, 6, 7, 8, 10].map(Some).to_vec());
    }

    #[test]
    fn encoded_len_overflow() {
        assert_eq!(STANDARD.encoded_len(usize::MAX), None);
        assert_eq!(URL_SAFE.encoded_len(usize::MAX), None);
    }

    #[test]
    fn default_padding_is_required() {
        assert_eq!(Padding::default(), Padding::Required);
        assert_eq!(STANDARD.padding(), Padding::Required);
    }
}
