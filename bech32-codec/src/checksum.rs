//! HRP expansion and the BCH checksum.
//!
//! The checksum is the remainder of the data, read as a polynomial over
//! GF(32), modulo a fixed degree-6 generator. The state is 30 bits wide: six
//! 5-bit coefficients.
//!
//! ```text
//! verify:  polymod(expand(hrp) || dp || checksum) == 1
//! create:  polymod(expand(hrp) || dp || [0; 6]) ^ 1  ->  six 5-bit groups
//! ```

use bech32_core::constants::{
    CHECKSUM_CONSTANT, CHECKSUM_LENGTH, GENERATOR, POLYMOD_LOW_MASK, POLYMOD_TOP_SHIFT,
};

// ═══════════════════════════════════════════════════════════════════════════════
// HRP EXPANSION
// ═══════════════════════════════════════════════════════════════════════════════

/// Expands the HRP into checksum input.
///
/// For an HRP of length `n` the result has `2n + 1` values: the high 3 bits
/// of every character, a zero, then the low 5 bits of every character. The
/// HRP must already be lower-cased.
///
/// # Example
///
/// ```
/// use bech32_codec::checksum::expand_hrp;
///
/// // 'b' = 0x62, 'c' = 0x63
/// assert_eq!(expand_hrp("bc"), vec![3, 3, 0, 2, 3]);
/// ```
pub fn expand_hrp(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut ret = Vec::with_capacity(bytes.len() * 2 + 1);
    ret.extend(bytes.iter().map(|&c| c >> 5));
    ret.push(0);
    ret.extend(bytes.iter().map(|&c| c & 0x1f));
    ret
}

// ═══════════════════════════════════════════════════════════════════════════════
// POLYMOD
// ═══════════════════════════════════════════════════════════════════════════════

/// Computes the 30-bit polymod of a sequence of 5-bit values.
pub fn polymod<I>(values: I) -> u32
where
    I: IntoIterator<Item = u8>,
{
    values.into_iter().fold(1, polymod_step)
}

/// Feeds one value into the polymod state.
///
/// The generator XORs are selected with an arithmetic mask (all ones when the
/// corresponding top bit is set, zero otherwise) rather than a branch.
#[inline]
fn polymod_step(chk: u32, value: u8) -> u32 {
    let top = chk >> POLYMOD_TOP_SHIFT;
    let mut chk = ((chk & POLYMOD_LOW_MASK) << 5) ^ u32::from(value);
    for (i, generator) in GENERATOR.iter().enumerate() {
        chk ^= 0u32.wrapping_sub((top >> i) & 1) & generator;
    }
    chk
}

// ═══════════════════════════════════════════════════════════════════════════════
// CREATE / VERIFY
// ═══════════════════════════════════════════════════════════════════════════════

/// Creates the six checksum values for a lower-case HRP and data part.
pub fn create_checksum(hrp: &str, dp: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let values = expand_hrp(hrp)
        .into_iter()
        .chain(dp.iter().copied())
        .chain([0u8; CHECKSUM_LENGTH]);
    let modulus = polymod(values) ^ CHECKSUM_CONSTANT;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, slot) in checksum.iter_mut().enumerate() {
        *slot = ((modulus >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Returns true if `dp` (checksum included) verifies against `hrp`.
pub fn verify_checksum(hrp: &str, dp: &[u8]) -> bool {
    let values = expand_hrp(hrp).into_iter().chain(dp.iter().copied());
    polymod(values) == CHECKSUM_CONSTANT
}
