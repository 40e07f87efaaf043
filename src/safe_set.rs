//! Explicit safe-character tables driving the percent-encoders.
//!
//! A [`SafeSet`] lists the ASCII characters an encoding pass copies through
//! unescaped. The two sets this crate ships, [`UNRESERVED`] and
//! [`COMPONENT`], are spelled out below character by character.

/// A set of ASCII characters that percent-encoding leaves unescaped.
///
/// The set is a 128-bit membership table and is built entirely in `const`
/// context, so custom sets cost nothing at runtime. Bytes outside the ASCII
/// range can never be members: every byte of a multi-byte UTF-8 sequence is
/// therefore always escaped, which keeps encoder output ASCII-only.
///
/// # Examples
///
/// ```
/// use uricomp::SafeSet;
///
/// const DIGITS: SafeSet = SafeSet::empty().allow_range(b'0', b'9');
///
/// assert!(DIGITS.contains(b'7'));
/// assert!(!DIGITS.contains(b'x'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeSet {
    bits: u128,
}

impl SafeSet {
    /// Create a set with no members, i.e. one that escapes every byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use uricomp::SafeSet;
    ///
    /// assert!(!SafeSet::empty().contains(b'a'));
    /// ```
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Return the set with one additional safe byte.
    ///
    /// # Panics
    ///
    /// Panics if `byte` is not ASCII. In `const` context this is a compile
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uricomp::SafeSet;
    ///
    /// const SLASH_ONLY: SafeSet = SafeSet::empty().allow(b'/');
    ///
    /// assert!(SLASH_ONLY.contains(b'/'));
    /// assert!(!SLASH_ONLY.contains(b'\\'));
    /// ```
    pub const fn allow(self, byte: u8) -> Self {
        assert!(byte.is_ascii(), "safe sets cover ASCII only");
        Self {
            bits: self.bits | 1 << byte,
        }
    }

    /// Return the set with an inclusive range of additional safe bytes.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or reaches outside ASCII. In `const`
    /// context this is a compile error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uricomp::SafeSet;
    ///
    /// const HEX_DIGITS: SafeSet = SafeSet::empty()
    ///     .allow_range(b'0', b'9')
    ///     .allow_range(b'A', b'F')
    ///     .allow_range(b'a', b'f');
    ///
    /// assert!(HEX_DIGITS.contains(b'c'));
    /// assert!(!HEX_DIGITS.contains(b'g'));
    /// ```
    pub const fn allow_range(self, first: u8, last: u8) -> Self {
        assert!(first <= last, "byte range is reversed");
        assert!(last.is_ascii(), "safe sets cover ASCII only");
        let mut bits = self.bits;
        let mut byte = first;
        while byte <= last {
            bits |= 1 << byte;
            byte += 1;
        }
        Self { bits }
    }

    /// Return the set without the given byte.
    ///
    /// Useful for narrowing one of the shipped sets instead of rebuilding it.
    ///
    /// # Panics
    ///
    /// Panics if `byte` is not ASCII. In `const` context this is a compile
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use uricomp::{COMPONENT, SafeSet};
    ///
    /// const NO_STAR: SafeSet = COMPONENT.deny(b'*');
    ///
    /// assert!(COMPONENT.contains(b'*'));
    /// assert!(!NO_STAR.contains(b'*'));
    /// ```
    pub const fn deny(self, byte: u8) -> Self {
        assert!(byte.is_ascii(), "safe sets cover ASCII only");
        Self {
            bits: self.bits & !(1 << byte),
        }
    }

    /// Test whether a byte is safe, i.e. copied through without escaping.
    ///
    /// Always `false` for bytes outside the ASCII range.
    ///
    /// # Examples
    ///
    /// ```
    /// use uricomp::UNRESERVED;
    ///
    /// assert!(UNRESERVED.contains(b'a'));
    /// assert!(!UNRESERVED.contains(b' '));
    /// assert!(!UNRESERVED.contains(0xC3));
    /// ```
    pub const fn contains(&self, byte: u8) -> bool {
        byte.is_ascii() && (self.bits >> byte) & 1 != 0
    }
}

/// The RFC 3986 unreserved characters: `A-Z`, `a-z`, `0-9`, `-`, `_`, `.`
/// and `~`.
///
/// These never need escaping in any URI component. A string made only of
/// unreserved characters encodes to itself.
///
/// # Examples
///
/// ```
/// use uricomp::UNRESERVED;
///
/// assert!(UNRESERVED.contains(b'~'));
/// assert!(!UNRESERVED.contains(b'!'));
/// ```
pub const UNRESERVED: SafeSet = SafeSet::empty()
    .allow_range(b'A', b'Z')
    .allow_range(b'a', b'z')
    .allow_range(b'0', b'9')
    .allow(b'-')
    .allow(b'_')
    .allow(b'.')
    .allow(b'~');

/// The baseline component set: [`UNRESERVED`] plus `!`, `'`, `(`, `)` and
/// `*`.
///
/// This is exactly the set of characters JavaScript's `encodeURIComponent`
/// leaves unescaped. The five extra characters are the ones the strict pass
/// in [`encode`](crate::encode()) exists to clean up. Note that `,`, `/`,
/// `?`, `:`, `@`, `&`, `=`, `+`, `$` and `#` are *not* members; those
/// survive only looser whole-URI encoders.
///
/// # Examples
///
/// ```
/// use uricomp::COMPONENT;
///
/// assert!(COMPONENT.contains(b'\''));
/// assert!(!COMPONENT.contains(b'/'));
/// assert!(!COMPONENT.contains(b'#'));
/// ```
pub const COMPONENT: SafeSet = UNRESERVED
    .allow(b'!')
    .allow(b'\'')
    .allow(b'(')
    .allow(b')')
    .allow(b'*');
