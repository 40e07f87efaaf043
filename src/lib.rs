//! # Strict URI Component Encoding
//!
//! A Rust library for percent-encoding strings destined for URI components,
//! including the five characters (`!`, `'`, `(`, `)`, `*`) that standard
//! component encoders historically leave unescaped. Supports both `std` and
//! `no_std` environments, making it suitable for embedded systems,
//! WebAssembly, and other constrained environments.
//!
//! Most component encoders treat `!'()*` as safe because older URI RFCs
//! classified them as unreserved "mark" characters. Contexts that embed
//! values between literal parentheses, or that simply want maximal
//! escaping, need them gone. Rather than inheriting whatever a platform
//! primitive considers safe, this crate spells its safe sets out as
//! constants and layers the five-character patch on top, so the output is
//! fully specified here.
//!
//! ## Features
//!
//! - **Strict component encoding**: [`encode`](encode()) guarantees none of
//!   `!'()*` survive, on top of exact `encodeURIComponent`-compatible escaping
//! - **Explicit safe sets**: [`SafeSet`] tables built in `const` context,
//!   with the shipped [`UNRESERVED`] and [`COMPONENT`] sets documented
//!   character by character
//! - **Checked decoding**: [`decode`](decode()) inverts the encoders and
//!   reports malformed input with byte positions instead of guessing
//! - **no_std support**: Works in embedded and constrained environments
//!
//! ## Quick Start
//!
//! ### Encoding
//!
//! ```rust
//! use uricomp::{encode, encode_component};
//!
//! // The baseline pass matches JavaScript's encodeURIComponent and leaves
//! // the five specials alone...
//! assert_eq!(encode_component("[!'()*]"), "%5B!'()*%5D");
//!
//! // ...the strict encoder patches them with lowercase triplets.
//! assert_eq!(encode("[!'()*]"), "%5B%21%27%28%29%2a%5D");
//! ```
//!
//! ### Custom safe sets
//!
//! ```rust
//! use uricomp::{UNRESERVED, percent_encode};
//!
//! // Keep path separators readable while escaping everything else.
//! let encoded = percent_encode("a/b c", &UNRESERVED.allow(b'/'));
//! assert_eq!(encoded, "a/b%20c");
//! ```
//!
//! ### Decoding
//!
//! ```rust
//! use uricomp::{decode, decode_lenient};
//!
//! assert_eq!(decode("it%27s%20%28ok%29").unwrap(), "it's (ok)");
//!
//! // Lenient decoding hands malformed input back unchanged.
//! assert_eq!(decode_lenient("broken %"), "broken %");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod decode;
pub mod encode;
pub mod safe_set;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
extern crate alloc;

pub use decode::{DecodeError, decode, decode_bytes, decode_lenient};
pub use encode::{encode, encode_component, percent_encode, percent_encode_bytes};
pub use safe_set::{COMPONENT, SafeSet, UNRESERVED};
