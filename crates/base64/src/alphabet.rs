//! The 64-symbol alphabets used to map sextets to characters.

use std::fmt;

use crate::constants::{INVALID, PAD, STANDARD_SYMBOLS, URL_SAFE_SYMBOLS};
use crate::AlphabetError;

/// An ordered set of 64 distinct printable ASCII symbols together with its
/// reverse lookup table.
///
/// # Example
///
/// ```
/// use fiirust_base64::Alphabet;
///
/// let symbols = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789.,";
/// assert!(Alphabet::new(symbols).is_ok());
/// assert!(Alphabet::new("ABC").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 64],
    lookup: [u8; 256],
}

impl Alphabet {
    /// `A-Z a-z 0-9 + /`
    pub const STANDARD: Alphabet = Alphabet::builtin(STANDARD_SYMBOLS);

    /// `A-Z a-z 0-9 - _`
    pub const URL_SAFE: Alphabet = Alphabet::builtin(URL_SAFE_SYMBOLS);

    /// Builds an alphabet from a 64-character string.
    ///
    /// # Errors
    ///
    /// Fails if `symbols` is not exactly 64 printable ASCII characters, contains
    /// `=`, or repeats a character.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        if let Some(index) = symbols.bytes().position(|b| !b.is_ascii()) {
            return Err(AlphabetError::NonPrintable(index));
        }
        let symbols: &[u8; 64] = symbols
            .as_bytes()
            .try_into()
            .map_err(|_| AlphabetError::InvalidLength(symbols.len()))?;
        Self::from_symbols(symbols)
    }

    /// Const counterpart of [`Alphabet::new`].
    pub const fn from_symbols(symbols: &[u8; 64]) -> Result<Self, AlphabetError> {
        let mut lookup = [INVALID; 256];
        let mut i = 0;
        while i < 64 {
            let symbol = symbols[i];
            if !symbol.is_ascii_graphic() {
                return Err(AlphabetError::NonPrintable(i));
            }
            if symbol == PAD {
                return Err(AlphabetError::ContainsPadding);
            }
            if lookup[symbol as usize] != INVALID {
                return Err(AlphabetError::Duplicate(symbol as char));
            }
            lookup[symbol as usize] = i as u8;
            i += 1;
        }
        Ok(Self {
            symbols: *symbols,
            lookup,
        })
    }

    const fn builtin(symbols: &[u8; 64]) -> Self {
        match Self::from_symbols(symbols) {
            Ok(alphabet) => alphabet,
            Err(_) => panic!("built-in alphabet is malformed"),
        }
    }

    /// The symbols in sextet order.
    pub fn symbols(&self) -> &[u8; 64] {
        &self.symbols
    }

    /// Symbol for the low six bits of `sextet`.
    #[inline]
    pub(crate) fn symbol(&self, sextet: u8) -> u8 {
        self.symbols[(sextet & 0x3F) as usize]
    }

    /// Sextet value of `byte`, or `None` if it is not in the alphabet.
    #[inline]
    pub(crate) fn sextet(&self, byte: u8) -> Option<u8> {
        match self.lookup[byte as usize] {
            INVALID => None,
            value => Some(value),
        }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}
