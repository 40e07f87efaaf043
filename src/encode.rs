//! Percent-encoding passes: the documented baseline and the strict form.
//!
//! The baseline pass escapes every byte outside an explicit [`SafeSet`] as
//! an uppercase `%XX` triplet. The strict form, [`encode`], runs the
//! baseline over [`COMPONENT`] and then patches the five characters that
//! set deliberately leaves alone.

use core::fmt::Write;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::safe_set::{COMPONENT, SafeSet};

/// Percent-encode raw bytes against an explicit safe set.
///
/// Every byte in `safe` is copied through as-is; every other byte becomes a
/// `%XX` triplet with uppercase hexadecimal. This is the byte-level entry
/// point for callers holding binary data (hashes, raw octet strings) rather
/// than text.
///
/// # Arguments
///
/// * `input` - The bytes to encode.
/// * `safe` - The set of ASCII bytes to leave unescaped.
///
/// # Returns
///
/// An ASCII-only `String`; outside `%XX` triplets every byte of it is a
/// member of `safe`.
///
/// # Examples
///
/// ```
/// use uricomp::{UNRESERVED, percent_encode_bytes};
///
/// assert_eq!(percent_encode_bytes(&[0x00, 0xFF, b' ', b'a'], &UNRESERVED), "%00%FF%20a");
/// ```
pub fn percent_encode_bytes(input: &[u8], safe: &SafeSet) -> String {
    let mut output = String::with_capacity(input.len());

    for &byte in input {
        if safe.contains(byte) {
            output.push(byte as char);
        } else {
            write!(&mut output, "%{:02X}", byte).unwrap();
        }
    }

    output
}

/// Percent-encode a string against an explicit safe set.
///
/// Equivalent to encoding the string's UTF-8 bytes: characters outside the
/// ASCII range are never safe, so each of their bytes becomes a `%XX`
/// triplet.
///
/// # Examples
///
/// ```
/// use uricomp::{SafeSet, percent_encode};
///
/// const DIGITS_ONLY: SafeSet = SafeSet::empty().allow_range(b'0', b'9');
///
/// assert_eq!(percent_encode("3.14", &DIGITS_ONLY), "3%2E14");
/// ```
pub fn percent_encode(input: &str, safe: &SafeSet) -> String {
    percent_encode_bytes(input.as_bytes(), safe)
}

/// Percent-encode a string for use as a URI component.
///
/// This is the baseline pass over the [`COMPONENT`] set and matches
/// JavaScript's `encodeURIComponent` byte for byte, including its habit of
/// leaving `!`, `'`, `(`, `)` and `*` unescaped. Use [`encode`] when those
/// five must not survive.
///
/// Spaces become `%20`, never `+`: this is component encoding, not
/// `application/x-www-form-urlencoded`.
///
/// # Arguments
///
/// * `input` - The string to encode. Any string is accepted, including empty.
///
/// # Returns
///
/// A new `String` containing the percent-encoded form of the input.
///
/// # Examples
///
/// ```
/// use uricomp::encode_component;
///
/// assert_eq!(encode_component("hello world"), "hello%20world");
/// assert_eq!(encode_component("50% off"), "50%25%20off");
/// assert_eq!(encode_component("café"), "caf%C3%A9");
///
/// // The five specials pass through untouched.
/// assert_eq!(encode_component("[!'()*]"), "%5B!'()*%5D");
/// ```
pub fn encode_component(input: &str) -> String {
    percent_encode(input, &COMPONENT)
}

/// Strictly percent-encode a string, escaping `!`, `'`, `(`, `)` and `*`
/// as well.
///
/// Two passes: the baseline [`encode_component`] pass, then a patch over
/// its output replacing each surviving literal `!`, `'`, `(`, `)` and `*`
/// with `%21`, `%27`, `%28`, `%29` and `%2a`. The patch emits lowercase
/// triplets while the baseline emits uppercase ones, so `*` becomes `%2a`,
/// not `%2A`; [`decode`](crate::decode()) accepts either case.
///
/// The operation is total: a `&str` is always valid UTF-8, so there is no
/// failure path, and the empty string encodes to itself. It is not
/// idempotent (re-encoding escapes the `%` of existing triplets), but
/// decoding inverts it exactly.
///
/// # Arguments
///
/// * `input` - The string to encode. Any string is accepted, including empty.
///
/// # Returns
///
/// An ASCII-only `String` containing no literal `!`, `'`, `(`, `)` or `*`;
/// all other escaping matches [`encode_component`] exactly.
///
/// # Examples
///
/// ```
/// use uricomp::encode;
///
/// assert_eq!(encode("[!'()*]"), "%5B%21%27%28%29%2a%5D");
/// assert_eq!(encode("it's (not) a *test*!"), "it%27s%20%28not%29%20a%20%2atest%2a%21");
///
/// // Unreserved characters are left untouched.
/// assert_eq!(encode("aAzZ09-._~"), "aAzZ09-._~");
///
/// // Not idempotent: the `%` of a triplet is itself escaped.
/// assert_eq!(encode("%20"), "%2520");
/// ```
pub fn encode(input: &str) -> String {
    escape_marks(&encode_component(input))
}

/// Patch pass: escape the five mark characters the baseline set keeps, with
/// lowercase hex.
fn escape_marks(encoded: &str) -> String {
    let mut output = String::with_capacity(encoded.len());

    for ch in encoded.chars() {
        match ch {
            '!' => output.push_str("%21"),
            '\'' => output.push_str("%27"),
            '(' => output.push_str("%28"),
            ')' => output.push_str("%29"),
            '*' => output.push_str("%2a"),
            _ => output.push(ch),
        }
    }

    output
}
