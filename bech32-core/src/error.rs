//! Error types for the Bech32 codec.
//!
//! Every validation rule has its own variant so callers can tell exactly
//! which rule rejected an input. All errors are raised at the point of
//! detection and are never retried.

use thiserror::Error;

use crate::constants::{
    CHECKSUM_LENGTH, MAX_BECH32_CHAR_VALUE, MAX_BECH32_LENGTH, MAX_DATA_VALUE, MAX_HRP_LENGTH,
    MIN_BECH32_CHAR_VALUE, MIN_BECH32_LENGTH,
};

/// Result type alias using `Bech32Error`.
pub type Result<T> = std::result::Result<T, Bech32Error>;

/// Main error type for all Bech32 operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bech32Error {
    // ═══════════════════════════════════════════════════════════════════════════
    // RAW STRING ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// String shorter than the 8-character minimum.
    #[error("bech32 string too short: {len} characters, minimum is {}", MIN_BECH32_LENGTH)]
    StringTooShort { len: usize },

    /// String longer than the 90-character maximum.
    #[error("bech32 string too long: {len} characters, maximum is {}", MAX_BECH32_LENGTH)]
    StringTooLong { len: usize },

    /// String contains both upper- and lower-case letters.
    #[error("bech32 string is mixed case")]
    MixedCase,

    /// A byte outside the printable range 33..=126.
    #[error(
        "bech32 string has value out of range: byte {byte:#04x} at position {position} \
         (allowed {}..={})",
        MIN_BECH32_CHAR_VALUE,
        MAX_BECH32_CHAR_VALUE
    )]
    CharOutOfRange { position: usize, byte: u8 },

    /// No separator character in the string.
    #[error("bech32 string is missing separator character")]
    MissingSeparator,

    // ═══════════════════════════════════════════════════════════════════════════
    // HUMAN-READABLE PART ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Empty human-readable part.
    #[error("HRP must be at least one character")]
    HrpTooShort,

    /// Human-readable part longer than 83 characters.
    #[error("HRP too long: {len} characters, maximum is {}", MAX_HRP_LENGTH)]
    HrpTooLong { len: usize },

    /// HRP, separator, data part and checksum together exceed 90 characters.
    #[error(
        "length of hrp + length of dp is too large: {len} characters, maximum is {}",
        MAX_BECH32_LENGTH
    )]
    CombinedTooLong { len: usize },

    // ═══════════════════════════════════════════════════════════════════════════
    // DATA PART ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Data part too short to hold a checksum.
    #[error("data part must be at least {} characters, got {len}", CHECKSUM_LENGTH)]
    DataPartTooShort { len: usize },

    /// Data value that does not fit the expected bit width.
    #[error("data value {value} at index {index} is out of range (maximum {})", MAX_DATA_VALUE)]
    DataValueOutOfRange { index: usize, value: u8 },

    /// Data-part character that is not in the Bech32 character set.
    #[error("data part contains invalid character {ch:?} at position {position}")]
    InvalidCharacter { position: usize, ch: char },

    /// Checksum does not verify. Only raised by the strict decoding entry points.
    #[error("bech32 checksum mismatch")]
    ChecksumMismatch,

    /// Non-zero or excess padding bits when regrouping data without padding.
    #[error("invalid padding in data part")]
    InvalidPadding,

    /// Bit widths for regrouping must each be between 1 and 8.
    #[error("cannot regroup from {from}-bit to {to}-bit values (widths must be 1..=8)")]
    InvalidBitWidth { from: u32, to: u32 },
}

impl Bech32Error {
    /// Returns true if the error comes from the raw-string validation cascade.
    pub fn is_string_error(&self) -> bool {
        matches!(
            self,
            Bech32Error::StringTooShort { .. }
                | Bech32Error::StringTooLong { .. }
                | Bech32Error::MixedCase
                | Bech32Error::CharOutOfRange { .. }
                | Bech32Error::MissingSeparator
        )
    }

    /// Returns true if the error concerns the human-readable part.
    pub fn is_hrp_error(&self) -> bool {
        matches!(
            self,
            Bech32Error::HrpTooShort
                | Bech32Error::HrpTooLong { .. }
                | Bech32Error::CombinedTooLong { .. }
        )
    }

    /// Returns true if the error concerns the data part.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Bech32Error::DataPartTooShort { .. }
                | Bech32Error::DataValueOutOfRange { .. }
                | Bech32Error::InvalidCharacter { .. }
                | Bech32Error::InvalidPadding
                | Bech32Error::InvalidBitWidth { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Bech32Error::StringTooLong { len: 91 };
        assert!(err.to_string().contains("91"));
        assert!(err.to_string().contains("90"));

        let err = Bech32Error::CharOutOfRange { position: 3, byte: 0x20 };
        assert!(err.to_string().contains("0x20"));
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn test_error_classification() {
        assert!(Bech32Error::MixedCase.is_string_error());
        assert!(Bech32Error::MissingSeparator.is_string_error());
        assert!(!Bech32Error::HrpTooShort.is_string_error());

        assert!(Bech32Error::HrpTooLong { len: 84 }.is_hrp_error());
        assert!(Bech32Error::CombinedTooLong { len: 91 }.is_hrp_error());

        assert!(Bech32Error::InvalidCharacter { position: 0, ch: 'b' }.is_data_error());
        assert!(Bech32Error::DataPartTooShort { len: 5 }.is_data_error());
        assert!(Bech32Error::InvalidBitWidth { from: 8, to: 0 }.is_data_error());
        assert!(!Bech32Error::ChecksumMismatch.is_data_error());
    }

    #[test]
    fn test_error_kinds_distinguishable() {
        assert_ne!(
            Bech32Error::StringTooShort { len: 0 },
            Bech32Error::StringTooLong { len: 0 }
        );
        assert_ne!(Bech32Error::HrpTooShort, Bech32Error::MissingSeparator);
    }
}
