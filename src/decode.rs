//! Checked decoding of percent-encoded input.
//!
//! Decoding is the only fallible surface of the crate: encoded input may be
//! truncated, carry bad hex digits, stray outside ASCII, or decode to octets
//! that are not UTF-8. [`decode`] reports each of those as a [`DecodeError`];
//! [`decode_lenient`] swallows them and hands the input back unchanged.

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use core::str::Utf8Error;

use thiserror::Error;

/// Error raised when percent-encoded input cannot be decoded.
///
/// Positions are byte offsets into the encoded input.
///
/// # Examples
///
/// ```
/// use uricomp::{DecodeError, decode};
///
/// assert_eq!(decode("50%"), Err(DecodeError::UnexpectedEnd { position: 2 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` escape ran off the end of the input before its two hex digits.
    #[error("escape sequence at byte {position} ends before its two hex digits")]
    UnexpectedEnd {
        /// Offset of the `%` opening the truncated escape.
        position: usize,
    },

    /// A `%` escape contained a byte that is not a hexadecimal digit.
    #[error("invalid hex digit {found:#04x} at byte {position}")]
    InvalidHexDigit {
        /// Offset of the offending byte.
        position: usize,
        /// The byte found where a hex digit was expected.
        found: u8,
    },

    /// The encoded input contained a byte outside the ASCII range.
    ///
    /// Percent-encoded text is ASCII by construction; anything else means
    /// the input was never encoded in the first place.
    #[error("non-ASCII byte {byte:#04x} at byte {position} of encoded input")]
    NonAsciiByte {
        /// Offset of the offending byte.
        position: usize,
        /// The byte itself.
        byte: u8,
    },

    /// The decoded octets do not form valid UTF-8.
    ///
    /// Use [`decode_bytes`] to get at the raw octets instead.
    #[error("decoded octets are not valid UTF-8")]
    InvalidUtf8(#[source] Utf8Error),
}

/// Decode percent-encoded input into raw octets.
///
/// Each `%XX` triplet becomes one byte and every other ASCII byte is copied
/// through. Both hex cases are accepted, so `%2a` and `%2A` decode alike.
/// No UTF-8 requirement is placed on the result, which makes this the right
/// entry point when the encoded data was binary to begin with.
///
/// # Arguments
///
/// * `encoded` - The percent-encoded input. Must be entirely ASCII.
///
/// # Returns
///
/// The decoded octets, or the first [`DecodeError`] encountered scanning
/// left to right.
///
/// # Examples
///
/// ```
/// use uricomp::decode_bytes;
///
/// assert_eq!(decode_bytes("%00%FF").unwrap(), vec![0x00, 0xFF]);
/// assert_eq!(decode_bytes("a%20b").unwrap(), b"a b");
/// ```
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = encoded.as_bytes();
    let mut raw = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = hex_digit(bytes, i, i + 1)?;
                let lo = hex_digit(bytes, i, i + 2)?;
                raw.push(hi << 4 | lo);
                i += 3;
            }
            byte if byte.is_ascii() => {
                raw.push(byte);
                i += 1;
            }
            byte => {
                return Err(DecodeError::NonAsciiByte { position: i, byte });
            }
        }
    }

    Ok(raw)
}

/// Decode percent-encoded input into a string.
///
/// Runs [`decode_bytes`] and then validates the result as UTF-8. This is
/// the exact inverse of [`encode`](crate::encode()) and
/// [`encode_component`](crate::encode_component): for every string `s`,
/// `decode(&encode(s))` returns `s`.
///
/// # Arguments
///
/// * `encoded` - The percent-encoded input. Must be entirely ASCII.
///
/// # Returns
///
/// The decoded string, or the first [`DecodeError`] encountered.
///
/// # Examples
///
/// ```
/// use uricomp::{decode, encode};
///
/// assert_eq!(decode("%5B%21%27%28%29%2a%5D").unwrap(), "[!'()*]");
/// assert_eq!(decode("caf%C3%A9").unwrap(), "café");
/// assert_eq!(decode(&encode("100% pure")).unwrap(), "100% pure");
/// ```
pub fn decode(encoded: &str) -> Result<String, DecodeError> {
    let raw = decode_bytes(encoded)?;
    String::from_utf8(raw).map_err(|e| DecodeError::InvalidUtf8(e.utf8_error()))
}

/// Decode percent-encoded input, returning it unchanged if malformed.
///
/// The infallible companion to [`decode`] for callers that treat encoded
/// and plain text alike and would rather display questionable input as-is
/// than fail on it.
///
/// # Examples
///
/// ```
/// use uricomp::decode_lenient;
///
/// assert_eq!(decode_lenient("100%25"), "100%");
///
/// // A bare trailing `%` is not a valid escape; the input comes back as-is.
/// assert_eq!(decode_lenient("100%"), "100%");
/// ```
pub fn decode_lenient(encoded: &str) -> String {
    match decode(encoded) {
        Ok(raw) => raw,
        Err(_) => String::from(encoded),
    }
}

/// Reads the hex digit at `at` for the escape opened at `start`.
fn hex_digit(bytes: &[u8], start: usize, at: usize) -> Result<u8, DecodeError> {
    match bytes.get(at) {
        None => Err(DecodeError::UnexpectedEnd { position: start }),
        Some(&byte) => match byte {
            b'0'..=b'9' => Ok(byte - b'0'),
            b'A'..=b'F' => Ok(10 + (byte - b'A')),
            b'a'..=b'f' => Ok(10 + (byte - b'a')),
            _ => Err(DecodeError::InvalidHexDigit {
                position: at,
                found: byte,
            }),
        },
    }
}
