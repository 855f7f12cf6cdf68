//! Regrouping between bit widths.
//!
//! Bech32 data parts are 5-bit values, while the callers of this crate hold
//! raw byte strings. These helpers pack bytes into 5-bit groups and back.
//! They know nothing about witness versions or programs.

use bech32_core::error::{Bech32Error, Result};

const MAX_BIT_WIDTH: u32 = 8;

/// Accumulates `from`-bit values and emits `to`-bit values, MSB first.
struct Regrouper {
    acc: u32,
    bits: u32,
    from: u32,
    to: u32,
    out: Vec<u8>,
}

impl Regrouper {
    /// Both widths must already be in `1..=MAX_BIT_WIDTH`.
    fn new(from: u32, to: u32, capacity: usize) -> Self {
        Self {
            acc: 0,
            bits: 0,
            from,
            to,
            out: Vec::with_capacity(capacity * from as usize / to as usize + 1),
        }
    }

    fn max_value(&self) -> u32 {
        (1 << self.to) - 1
    }

    /// `value` must fit in `from` bits.
    fn push(&mut self, value: u8) {
        let max_acc = (1u32 << (self.from + self.to - 1)) - 1;
        self.acc = ((self.acc << self.from) | u32::from(value)) & max_acc;
        self.bits += self.from;
        while self.bits >= self.to {
            self.bits -= self.to;
            self.out.push(((self.acc >> self.bits) & self.max_value()) as u8);
        }
    }

    /// Flushes leftover bits as a zero-padded final group.
    fn finish_padded(mut self) -> Vec<u8> {
        if self.bits > 0 {
            let last = (self.acc << (self.to - self.bits)) & self.max_value();
            self.out.push(last as u8);
        }
        self.out
    }

    /// Leftover bits must be fewer than `from` and all zero.
    fn finish_strict(self) -> Result<Vec<u8>> {
        let leftover = (self.acc << (self.to - self.bits)) & self.max_value();
        if self.bits >= self.from || leftover != 0 {
            return Err(Bech32Error::InvalidPadding);
        }
        Ok(self.out)
    }
}

/// Regroups `data` from `from`-bit values into `to`-bit values.
///
/// With `pad` the final partial group is zero-padded; without it, leftover
/// bits must be zero and shorter than one input group.
///
/// # Errors
///
/// `InvalidBitWidth` unless both widths are in `1..=8`,
/// `DataValueOutOfRange` if an input value is wider than `from` bits,
/// `InvalidPadding` if `pad` is false and the leftover bits are invalid.
///
/// # Example
///
/// ```
/// use bech32_codec::bits::convert_bits;
///
/// assert_eq!(convert_bits(&[0xff, 0x00], 8, 5, true).unwrap(), vec![31, 28, 0, 0]);
/// ```
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>> {
    let widths = 1..=MAX_BIT_WIDTH;
    if !widths.contains(&from) || !widths.contains(&to) {
        return Err(Bech32Error::InvalidBitWidth { from, to });
    }

    let mut regrouper = Regrouper::new(from, to, data.len());
    for (index, &value) in data.iter().enumerate() {
        if u32::from(value) >> from != 0 {
            return Err(Bech32Error::DataValueOutOfRange { index, value });
        }
        regrouper.push(value);
    }

    if pad {
        Ok(regrouper.finish_padded())
    } else {
        regrouper.finish_strict()
    }
}

/// Packs bytes into zero-padded 5-bit values.
pub fn to_base32(bytes: &[u8]) -> Vec<u8> {
    let mut regrouper = Regrouper::new(8, 5, bytes.len());
    for &byte in bytes {
        regrouper.push(byte);
    }
    regrouper.finish_padded()
}

/// Unpacks 5-bit values into bytes, rejecting non-zero padding.
pub fn from_base32(values: &[u8]) -> Result<Vec<u8>> {
    convert_bits(values, 5, 8, false)
}
