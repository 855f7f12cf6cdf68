//! Forward and reverse character tables.
//!
//! The forward table maps a 5-bit value to its symbol. The reverse table maps
//! an ASCII code to its 5-bit value and is case-symmetric: `'Q'` and `'q'`
//! both map to 0. Anything outside the table (including non-ASCII) is `None`.

use bech32_core::constants::{CHARSET, CHARSET_SIZE, REVERSE_CHARSET_SIZE};

/// ASCII code to 5-bit value, built from [`CHARSET`] at compile time.
pub static REVERSE_CHARSET: [Option<u8>; REVERSE_CHARSET_SIZE] = build_reverse_charset();

const fn build_reverse_charset() -> [Option<u8>; REVERSE_CHARSET_SIZE] {
    let mut table = [None; REVERSE_CHARSET_SIZE];
    let mut value = 0;
    while value < CHARSET_SIZE {
        let symbol = CHARSET[value];
        table[symbol as usize] = Some(value as u8);
        table[symbol.to_ascii_uppercase() as usize] = Some(value as u8);
        value += 1;
    }
    table
}

/// Returns the symbol for a 5-bit value, or `None` if `value > 31`.
#[inline]
pub fn to_char(value: u8) -> Option<char> {
    CHARSET.get(value as usize).map(|&b| b as char)
}

/// Returns the 5-bit value for a symbol, in either case.
#[inline]
pub fn from_char(ch: char) -> Option<u8> {
    REVERSE_CHARSET.get(ch as usize).copied().flatten()
}

/// Returns true if `ch` is one of the 32 lower-case data symbols.
#[inline]
pub fn is_charset_char(ch: char) -> bool {
    ch.is_ascii() && CHARSET.contains(&(ch as u8))
}
