//! The decoded (or about-to-be-encoded) pair of a Bech32 string.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DATA_VALUE, MAX_HRP_LENGTH, MIN_HRP_LENGTH};

// ═══════════════════════════════════════════════════════════════════════════════
// HRP AND DATA PART
// ═══════════════════════════════════════════════════════════════════════════════

/// Human-readable part plus data part of a Bech32 string.
///
/// `dp` holds 5-bit values (0..=31). A pair returned from decoding never
/// contains the checksum; it is stripped once verified.
///
/// The default value (empty `hrp`, empty `dp`) is the sentinel returned when
/// a well-formed string fails its checksum. Check for it with [`HrpAndDp::is_empty`].
///
/// # Example
/// ```
/// use bech32_core::HrpAndDp;
///
/// let pair = HrpAndDp::new("bc", vec![0, 14, 20]);
/// assert_eq!(pair.hrp, "bc");
/// assert!(!pair.is_empty());
/// assert!(HrpAndDp::default().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HrpAndDp {
    /// Human-readable part
    pub hrp: String,
    /// Data part as 5-bit values
    pub dp: Vec<u8>,
}

impl HrpAndDp {
    /// Creates a pair from its parts.
    pub fn new(hrp: impl Into<String>, dp: Vec<u8>) -> Self {
        Self {
            hrp: hrp.into(),
            dp,
        }
    }

    /// Returns true for the checksum-mismatch sentinel.
    ///
    /// A successfully decoded string always has a non-empty HRP, so an empty
    /// HRP is enough to identify the sentinel.
    pub fn is_empty(&self) -> bool {
        self.hrp.is_empty() && self.dp.is_empty()
    }

    /// Returns the human-readable part.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// Returns the data part.
    pub fn dp(&self) -> &[u8] {
        &self.dp
    }

    /// Splits into `(hrp, dp)`.
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.hrp, self.dp)
    }

    /// Cheap structural check: HRP length in bounds and all values 5-bit.
    ///
    /// This does not check the combined length; encoding does that.
    pub fn is_well_formed(&self) -> bool {
        (MIN_HRP_LENGTH..=MAX_HRP_LENGTH).contains(&self.hrp.len())
            && self.dp.iter().all(|&v| v <= MAX_DATA_VALUE)
    }
}

impl From<(String, Vec<u8>)> for HrpAndDp {
    fn from((hrp, dp): (String, Vec<u8>)) -> Self {
        Self { hrp, dp }
    }
}
