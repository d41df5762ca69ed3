//! Error types for base64 operations.

use std::fmt;

use thiserror::Error;

/// Returned by decoding when the input is not valid base64.
///
/// Decoding is all-or-nothing: no partial output accompanies this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid base64 at offset {position}: {reason}")]
pub struct InvalidEncoding {
    position: usize,
    reason: Reason,
}

impl InvalidEncoding {
    pub(crate) fn new(position: usize, reason: Reason) -> Self {
        Self { position, reason }
    }

    /// Byte offset into the input where the problem was detected.
    ///
    /// For [`Reason::InvalidLength`] this is the input length.
    pub fn position(&self) -> usize {
        self.position
    }

    /// What was wrong with the input.
    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// Shifts the position by `offset`, for callers that decoded a slice of a
    /// larger input.
    pub fn offset_by(self, offset: usize) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }
}

/// Why an input was rejected by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The input length cannot be produced by the encoder in this padding mode.
    InvalidLength(usize),
    /// A character that is neither an alphabet symbol nor `=`.
    InvalidCharacter(char),
    /// A `=` followed by a non-padding character.
    MisplacedPadding,
    /// More than two trailing `=` characters.
    ExcessPadding(usize),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::InvalidLength(len) => write!(f, "invalid length {len}"),
            Reason::InvalidCharacter(c) => write!(f, "invalid character {c:?}"),
            Reason::MisplacedPadding => write!(f, "padding must come last"),
            Reason::ExcessPadding(n) => write!(f, "{n} padding characters, at most 2 allowed"),
        }
    }
}

/// Returned when a custom alphabet cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must have 64 symbols, got {0}")]
    InvalidLength(usize),
    #[error("alphabet symbol at index {0} is not printable ASCII")]
    NonPrintable(usize),
    #[error("alphabet must not contain the padding symbol '='")]
    ContainsPadding,
    #[error("alphabet symbol {0:?} appears more than once")]
    Duplicate(char),
}

/// Returned by [`Codec::encode_to_slice`](crate::Codec::encode_to_slice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeSliceError {
    #[error("output buffer too small: need {required} bytes, have {available}")]
    OutputTooSmall { required: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_by_shifts_position_only() {
        let err = InvalidEncoding::new(2, Reason::MisplacedPadding).offset_by(4);
        assert_eq!(err.position(), 6);
        assert_eq!(err.reason(), Reason::MisplacedPadding);
        assert_eq!(err.to_string(), "invalid base64 at offset 6: padding must come last");
    }
}
