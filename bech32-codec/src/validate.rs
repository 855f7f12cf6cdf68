//! Input validation cascade.
//!
//! Each rule is an independent function returning a distinct error. The
//! rules are kept in ordered tables so the earliest failing rule always wins:
//!
//! ```text
//! raw string:  too short -> too long -> mixed case -> out of range -> no separator
//! encode:      hrp too short -> hrp too long -> hrp out of range -> combined too long
//!              -> value out of range
//! decode:      hrp too short -> hrp too long -> data part too short
//! ```

use tracing::debug;

use bech32_core::constants::{
    CHECKSUM_LENGTH, MAX_BECH32_CHAR_VALUE, MAX_BECH32_LENGTH, MAX_DATA_VALUE, MAX_HRP_LENGTH,
    MIN_BECH32_CHAR_VALUE, MIN_BECH32_LENGTH, MIN_HRP_LENGTH, SEPARATOR,
};
use bech32_core::error::{Bech32Error, Result};

/// A rule applied to a raw candidate string.
pub type StringRule = fn(&str) -> Result<()>;

/// A rule applied to a human-readable part and a data part.
pub type PartsRule = fn(&str, &[u8]) -> Result<()>;

/// Raw-string rules, in reporting order.
pub const STRING_RULES: [StringRule; 5] = [
    reject_string_too_short,
    reject_string_too_long,
    reject_string_mixed_case,
    reject_string_values_out_of_range,
    reject_string_without_separator,
];

/// Rules checked before encoding `(hrp, dp)`.
pub const ENCODE_RULES: [PartsRule; 5] = [
    reject_hrp_too_short,
    reject_hrp_too_long,
    reject_hrp_values_out_of_range,
    reject_both_parts_too_long,
    reject_data_values_out_of_range,
];

/// Rules checked on the split `(hrp, data characters)` of a decoded string.
pub const DECODE_RULES: [PartsRule; 3] = [
    reject_hrp_too_short,
    reject_hrp_too_long,
    reject_data_part_too_short,
];

// ═══════════════════════════════════════════════════════════════════════════════
// CASCADES
// ═══════════════════════════════════════════════════════════════════════════════

/// Runs [`STRING_RULES`] against a raw string.
pub fn validate_string(bstring: &str) -> Result<()> {
    STRING_RULES
        .iter()
        .try_for_each(|rule| rule(bstring))
        .map_err(|e| {
            debug!(len = bstring.len(), error = %e, "Rejected bech32 string");
            e
        })
}

/// Runs [`ENCODE_RULES`] against an encode request.
pub fn validate_for_encode(hrp: &str, dp: &[u8]) -> Result<()> {
    run_parts_rules(&ENCODE_RULES, hrp, dp)
}

/// Runs [`DECODE_RULES`] against a split string.
pub fn validate_for_decode(hrp: &str, data_chars: &[u8]) -> Result<()> {
    run_parts_rules(&DECODE_RULES, hrp, data_chars)
}

fn run_parts_rules(rules: &[PartsRule], hrp: &str, dp: &[u8]) -> Result<()> {
    rules.iter().try_for_each(|rule| rule(hrp, dp)).map_err(|e| {
        debug!(hrp_len = hrp.len(), dp_len = dp.len(), error = %e, "Rejected hrp/data part");
        e
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// RAW STRING RULES
// ═══════════════════════════════════════════════════════════════════════════════

/// HRP (min 1 char) + separator + 6-char checksum.
pub fn reject_string_too_short(bstring: &str) -> Result<()> {
    if bstring.len() < MIN_BECH32_LENGTH {
        return Err(Bech32Error::StringTooShort { len: bstring.len() });
    }
    Ok(())
}

/// At most 90 characters.
pub fn reject_string_too_long(bstring: &str) -> Result<()> {
    if bstring.len() > MAX_BECH32_LENGTH {
        return Err(Bech32Error::StringTooLong { len: bstring.len() });
    }
    Ok(())
}

/// All upper or all lower; digits and symbols have no case.
pub fn reject_string_mixed_case(bstring: &str) -> Result<()> {
    let has_upper = bstring.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = bstring.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower {
        return Err(Bech32Error::MixedCase);
    }
    Ok(())
}

/// Every byte must be printable ASCII (33..=126).
pub fn reject_string_values_out_of_range(bstring: &str) -> Result<()> {
    match bstring
        .bytes()
        .enumerate()
        .find(|&(_, b)| !(MIN_BECH32_CHAR_VALUE..=MAX_BECH32_CHAR_VALUE).contains(&b))
    {
        Some((position, byte)) => Err(Bech32Error::CharOutOfRange { position, byte }),
        None => Ok(()),
    }
}

/// At least one `1` must be present.
pub fn reject_string_without_separator(bstring: &str) -> Result<()> {
    if !bstring.contains(SEPARATOR) {
        return Err(Bech32Error::MissingSeparator);
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// HRP / DATA PART RULES
// ═══════════════════════════════════════════════════════════════════════════════

/// HRP must not be empty.
pub fn reject_hrp_too_short(hrp: &str, _dp: &[u8]) -> Result<()> {
    if hrp.len() < MIN_HRP_LENGTH {
        return Err(Bech32Error::HrpTooShort);
    }
    Ok(())
}

/// HRP is at most 83 characters.
pub fn reject_hrp_too_long(hrp: &str, _dp: &[u8]) -> Result<()> {
    if hrp.len() > MAX_HRP_LENGTH {
        return Err(Bech32Error::HrpTooLong { len: hrp.len() });
    }
    Ok(())
}

/// HRP bytes must be printable ASCII, or the encoded string would not decode.
pub fn reject_hrp_values_out_of_range(hrp: &str, _dp: &[u8]) -> Result<()> {
    reject_string_values_out_of_range(hrp)
}

/// hrp + separator + dp + checksum must fit in 90 characters.
pub fn reject_both_parts_too_long(hrp: &str, dp: &[u8]) -> Result<()> {
    let len = hrp.len() + 1 + dp.len() + CHECKSUM_LENGTH;
    if len > MAX_BECH32_LENGTH {
        return Err(Bech32Error::CombinedTooLong { len });
    }
    Ok(())
}

/// A decoded data part must at least hold the checksum.
pub fn reject_data_part_too_short(_hrp: &str, dp: &[u8]) -> Result<()> {
    if dp.len() < CHECKSUM_LENGTH {
        return Err(Bech32Error::DataPartTooShort { len: dp.len() });
    }
    Ok(())
}

/// Values index into the 32-symbol charset.
pub fn reject_data_values_out_of_range(_hrp: &str, dp: &[u8]) -> Result<()> {
    match dp.iter().enumerate().find(|&(_, &v)| v > MAX_DATA_VALUE) {
        Some((index, &value)) => Err(Bech32Error::DataValueOutOfRange { index, value }),
        None => Ok(()),
    }
}
