/// Symbols of the standard alphabet (RFC 4648 §4), indexed by sextet value.
pub const STANDARD_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Symbols of the URL- and filename-safe alphabet (RFC 4648 §5).
pub const URL_SAFE_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding symbol appended to short final groups.
pub const PAD: u8 = b'=';

/// Marks bytes that do not belong to an alphabet in its reverse lookup table.
pub(crate) const INVALID: u8 = 0xFF;
