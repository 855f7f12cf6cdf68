//! Encode and decode entry points.
//!
//! ## Decode outcomes
//!
//! | Input                                  | [`decode`]              | [`decode_checked`]          |
//! |----------------------------------------|-------------------------|-----------------------------|
//! | valid                                  | `Ok(pair)`              | `Ok(pair)`                  |
//! | structurally malformed                 | `Err(kind)`             | `Err(kind)`                 |
//! | well formed, checksum does not verify  | `Ok(HrpAndDp::default())` | `Err(ChecksumMismatch)`   |
//!
//! Callers of [`decode`] tell "corrupted" apart from "malformed" by the
//! empty sentinel pair.

use tracing::{debug, trace};

use bech32_core::constants::{CHECKSUM_LENGTH, SEPARATOR};
use bech32_core::error::{Bech32Error, Result};
use bech32_core::types::HrpAndDp;

use crate::charset;
use crate::checksum::{create_checksum, verify_checksum};
use crate::validate;

// ═══════════════════════════════════════════════════════════════════════════════
// ENCODE
// ═══════════════════════════════════════════════════════════════════════════════

/// Encodes a human-readable part and a data part into a Bech32 string.
///
/// The HRP is lower-cased; the output is always lower case.
///
/// # Errors
///
/// `HrpTooShort`, `HrpTooLong`, `CharOutOfRange` (an HRP byte outside
/// 33..=126), `CombinedTooLong` or `DataValueOutOfRange`, checked in that
/// order. Nothing is produced on failure.
///
/// # Example
///
/// ```
/// use bech32_codec::encode;
///
/// assert_eq!(encode("A", &[]).unwrap(), "a12uel5l");
/// ```
pub fn encode(hrp: &str, dp: &[u8]) -> Result<String> {
    validate::validate_for_encode(hrp, dp)?;

    let hrp = hrp.to_ascii_lowercase();
    let checksum = create_checksum(&hrp, dp);

    let mut ret = String::with_capacity(hrp.len() + 1 + dp.len() + CHECKSUM_LENGTH);
    ret.push_str(&hrp);
    ret.push(SEPARATOR);
    for (index, &value) in dp.iter().chain(checksum.iter()).enumerate() {
        let ch = charset::to_char(value)
            .ok_or(Bech32Error::DataValueOutOfRange { index, value })?;
        ret.push(ch);
    }

    trace!(hrp = %hrp, dp_len = dp.len(), "Encoded bech32 string");
    Ok(ret)
}

/// Encodes an [`HrpAndDp`] pair.
pub fn encode_parts(parts: &HrpAndDp) -> Result<String> {
    encode(&parts.hrp, &parts.dp)
}

// ═══════════════════════════════════════════════════════════════════════════════
// DECODE
// ═══════════════════════════════════════════════════════════════════════════════

/// Decodes a Bech32 string into its lower-case HRP and data part.
///
/// The checksum is verified and stripped. If the string is well formed but
/// the checksum does not verify, the empty sentinel pair is returned instead
/// of an error.
///
/// # Errors
///
/// Any raw-string, HRP or data-part validation failure, or
/// `InvalidCharacter` for a data symbol outside the charset.
///
/// # Example
///
/// ```
/// use bech32_codec::decode;
///
/// let pair = decode("A12UEL5L").unwrap();
/// assert_eq!(pair.hrp, "a");
/// assert!(pair.dp.is_empty());
///
/// // corrupted, but well formed
/// assert!(decode("a12xel5l").unwrap().is_empty());
/// ```
pub fn decode(bstring: &str) -> Result<HrpAndDp> {
    match decode_checked(bstring) {
        Err(Bech32Error::ChecksumMismatch) => Ok(HrpAndDp::default()),
        other => other,
    }
}

/// Like [`decode`], but a checksum mismatch is `Err(ChecksumMismatch)`.
pub fn decode_checked(bstring: &str) -> Result<HrpAndDp> {
    let (hrp, mut values) = parse(bstring)?;

    if !verify_checksum(&hrp, &values) {
        debug!(hrp = %hrp, len = bstring.len(), "Bech32 checksum mismatch");
        return Err(Bech32Error::ChecksumMismatch);
    }

    values.truncate(values.len() - CHECKSUM_LENGTH);
    trace!(hrp = %hrp, dp_len = values.len(), "Decoded bech32 string");
    Ok(HrpAndDp { hrp, dp: values })
}

/// Checks a string without keeping the decoded parts.
///
/// Returns `Ok(false)` for a well-formed string whose checksum fails.
pub fn verify(bstring: &str) -> Result<bool> {
    let (hrp, values) = parse(bstring)?;
    Ok(verify_checksum(&hrp, &values))
}

/// Validates, splits at the last separator, lower-cases the HRP and maps the
/// data characters. The checksum is still attached to the returned values.
fn parse(bstring: &str) -> Result<(String, Vec<u8>)> {
    validate::validate_string(bstring)?;

    let pos = bstring.rfind(SEPARATOR).ok_or(Bech32Error::MissingSeparator)?;
    let (hrp, data_chars) = (&bstring[..pos], &bstring[pos + 1..]);
    validate::validate_for_decode(hrp, data_chars.as_bytes())?;

    // case was proven uniform above
    let hrp = hrp.to_ascii_lowercase();
    let values = map_data_part(data_chars, pos + 1)?;
    Ok((hrp, values))
}

/// Maps data characters through the reverse charset; `offset` is the
/// position of the first data character in the full string.
fn map_data_part(data_chars: &str, offset: usize) -> Result<Vec<u8>> {
    data_chars
        .char_indices()
        .map(|(i, ch)| {
            charset::from_char(ch).ok_or(Bech32Error::InvalidCharacter {
                position: offset + i,
                ch,
            })
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// SANITIZER
// ═══════════════════════════════════════════════════════════════════════════════

/// Drops every character that is neither the separator nor (case-insensitively)
/// a charset symbol.
///
/// Kept characters retain their case. No length or structure checks are made,
/// so the result may still fail [`decode`].
///
/// # Example
///
/// ```
/// use bech32_codec::strip_unknown_chars;
///
/// assert_eq!(strip_unknown_chars("a1-2uel 5l!"), "a12uel5l");
/// assert_eq!(strip_unknown_chars("A12UEL5L"), "A12UEL5L");
/// ```
pub fn strip_unknown_chars(bstring: &str) -> String {
    bstring
        .chars()
        .filter(|&c| c == SEPARATOR || charset::is_charset_char(c.to_ascii_lowercase()))
        .collect()
}
