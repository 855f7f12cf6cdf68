//! # Bech32 Core
//!
//! Core types, errors, and constants for the Bech32 (BIP-0173) codec.
//!
//! This crate provides the building blocks used by `bech32-codec` and the CLI:
//!
//! - **Types**: [`HrpAndDp`], the human-readable part plus 5-bit data part
//! - **Errors**: one [`Bech32Error`] variant per validation rule
//! - **Constants**: character set, length limits, checksum generator
//!
//! ## Example
//!
//! ```rust
//! use bech32_core::{HrpAndDp, CHARSET, MAX_BECH32_LENGTH};
//!
//! let pair = HrpAndDp::new("a", vec![]);
//! let json = serde_json::to_string(&pair).unwrap();
//! assert_eq!(json, r#"{"hrp":"a","dp":[]}"#);
//! assert_eq!(CHARSET[0], b'q');
//! assert_eq!(MAX_BECH32_LENGTH, 90);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Bech32Error, Result};
pub use types::*;
