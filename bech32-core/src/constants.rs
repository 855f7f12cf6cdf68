//! Bech32 constants from BIP-0173.
//!
//! Every length limit, the character set and the checksum generator are fixed
//! by the standard. Changing any of the generator values keeps round-trips
//! working but silently destroys the error-detection guarantee.

// ═══════════════════════════════════════════════════════════════════════════════
// CHARACTER SET
// ═══════════════════════════════════════════════════════════════════════════════

/// The 32 data characters, indexed by 5-bit value (`0 -> 'q'`, `10 -> '2'`, ...).
pub const CHARSET: [u8; CHARSET_SIZE] = *b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Number of symbols in the data character set.
pub const CHARSET_SIZE: usize = 32;

/// Size of the reverse lookup table (the 7-bit ASCII range).
pub const REVERSE_CHARSET_SIZE: usize = 128;

/// Separator between the human-readable part and the data part.
pub const SEPARATOR: char = '1';

// ═══════════════════════════════════════════════════════════════════════════════
// LENGTH LIMITS
// ═══════════════════════════════════════════════════════════════════════════════

/// Number of 5-bit checksum symbols appended to every data part.
pub const CHECKSUM_LENGTH: usize = 6;

/// Shortest legal string: 1-char HRP + separator + checksum.
pub const MIN_BECH32_LENGTH: usize = 1 + 1 + CHECKSUM_LENGTH;

/// Longest legal string.
pub const MAX_BECH32_LENGTH: usize = 90;

/// Shortest legal human-readable part.
pub const MIN_HRP_LENGTH: usize = 1;

/// Longest legal human-readable part (90 - separator - checksum).
pub const MAX_HRP_LENGTH: usize = MAX_BECH32_LENGTH - 1 - CHECKSUM_LENGTH;

/// Lowest byte value allowed anywhere in a Bech32 string (`'!'`).
pub const MIN_BECH32_CHAR_VALUE: u8 = 33;

/// Highest byte value allowed anywhere in a Bech32 string (`'~'`).
pub const MAX_BECH32_CHAR_VALUE: u8 = 126;

/// Largest value a single data-part symbol can hold.
pub const MAX_DATA_VALUE: u8 = (CHARSET_SIZE - 1) as u8;

// ═══════════════════════════════════════════════════════════════════════════════
// CHECKSUM
// ═══════════════════════════════════════════════════════════════════════════════

/// Generator coefficients of the BCH code over GF(32).
pub const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

/// Polymod value of a correctly checksummed string.
pub const CHECKSUM_CONSTANT: u32 = 1;

/// Mask selecting the low 25 bits of the 30-bit polymod state.
pub const POLYMOD_LOW_MASK: u32 = 0x01ff_ffff;

/// Shift that exposes the top 5 bits of the 30-bit polymod state.
pub const POLYMOD_TOP_SHIFT: u32 = 25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_limits() {
        assert_eq!(MIN_BECH32_LENGTH, 8);
        assert_eq!(MAX_HRP_LENGTH, 83);
        assert_eq!(MAX_DATA_VALUE, 31);
    }

    #[test]
    fn test_charset_symbols_unique() {
        for (i, a) in CHARSET.iter().enumerate() {
            for (j, b) in CHARSET.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "charset symbols must be unique");
                }
            }
        }
    }

    #[test]
    fn test_charset_excludes_ambiguous_symbols() {
        // '1' is the separator; 'b', 'i', 'o' are too easy to misread
        for excluded in [b'1', b'b', b'i', b'o'] {
            assert!(!CHARSET.contains(&excluded));
        }
    }

    #[test]
    fn test_generator_fits_30_bits() {
        assert!(GENERATOR.iter().all(|&g| g < (1 << 30)));
    }
}
