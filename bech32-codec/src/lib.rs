//! # Bech32 Codec
//!
//! Encoding and decoding of Bech32 strings as defined by BIP-0173.
//!
//! This crate provides:
//!
//! - **Charset**: forward and case-symmetric reverse character tables
//! - **Validation**: the ordered rejection cascade, one error kind per rule
//! - **Checksum**: HRP expansion and the BCH polymod over GF(32)
//! - **Codec**: [`encode`], [`decode`], [`decode_checked`], [`verify`] and
//!   the [`strip_unknown_chars`] sanitizer
//! - **Bits**: regrouping bytes into 5-bit data values and back
//!
//! Every operation is a pure function; nothing is cached or shared besides
//! the constant tables, so all of it is safe to call from any thread.
//!
//! ## Example
//!
//! ```rust
//! use bech32_codec::{decode, encode, to_base32};
//!
//! let dp = to_base32(b"hello");
//! let encoded = encode("TxRef", &dp)?;
//! assert_eq!(encoded, "txref1dpjkcmr0anqytx");
//!
//! let decoded = decode(&encoded.to_uppercase())?;
//! assert_eq!(decoded.hrp, "txref");
//! assert_eq!(decoded.dp, dp);
//! # Ok::<(), bech32_codec::Bech32Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod bits;
pub mod charset;
pub mod checksum;
pub mod codec;
pub mod validate;

// Re-export main functions at crate root
pub use bits::{convert_bits, from_base32, to_base32};
pub use codec::{decode, decode_checked, encode, encode_parts, strip_unknown_chars, verify};

pub use bech32_core::{Bech32Error, HrpAndDp, Result};
