//! Domain types for the Bech32 codec.
//!
//! - [`HrpAndDp`]: human-readable part plus 5-bit data part

mod hrp_and_dp;

pub use hrp_and_dp::*;
