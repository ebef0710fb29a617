// Hex text to bit sequence transcoding
// Every hex digit expands to exactly four bits, most significant bit first.

use crate::error::{BitsError, Result};
use std::fmt;
use std::str::FromStr;

/// An immutable, fully materialized sequence of bits.
///
/// Bits are packed MSB-first into bytes; `len` is the logical length, which is
/// always `4 * hex_len` and may stop halfway through the last byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitSequence {
    bytes: Vec<u8>,
    len: usize,
}

impl BitSequence {
    /// Transcode a hex string (case-insensitive) into bits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut bytes = Vec::with_capacity(hex.len().div_ceil(2));
        let mut len = 0;

        for (index, character) in hex.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(BitsError::Format { character, index })? as u8;

            if index % 2 == 0 {
                bytes.push(nibble << 4);
            } else if let Some(last) = bytes.last_mut() {
                *last |= nibble;
            }
            len += 4;
        }

        Ok(Self { bytes, len })
    }

    /// Number of logical bits
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the bit at @index, or None past the end
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some((byte >> (7 - index % 8)) & 1 == 1)
    }

    /// Iterate over all logical bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Backing bytes; the final byte is zero-padded when the length is odd in nibbles
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Render as a string of '0' and '1' characters
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

impl FromStr for BitSequence {
    type Err = BitsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

/// Convenience wrapper around [`BitSequence::from_hex`]
pub fn hex_to_bits(hex: &str) -> Result<BitSequence> {
    BitSequence::from_hex(hex)
}
