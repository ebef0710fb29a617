// Forward-only read cursor over a bit sequence
// Reference: BITS fields are unsigned, big-endian, MSB-first

use super::hex::BitSequence;
use crate::error::{BitsError, Result};
use nom::{bits::complete::take, IResult};

type BitInput<'a> = (&'a [u8], usize);

/// Widest field a single `read_fixed` call can return
pub const MAX_READ_WIDTH: usize = 64;

fn take_bits(input: BitInput<'_>, count: usize) -> IResult<BitInput<'_>, u64> {
    take(count)(input)
}

/// A read pointer over an immutable [`BitSequence`].
///
/// The position only ever moves forward. Reads never cross `limit`, which
/// starts at the end of the sequence and can be narrowed to frame a run of
/// subpackets.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    bits: &'a BitSequence,
    position: usize,
    limit: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(bits: &'a BitSequence) -> Self {
        Self {
            bits,
            position: 0,
            limit: bits.len(),
        }
    }

    /// Consume @n bits and return them as a big-endian unsigned integer
    pub fn read_fixed(&mut self, n: usize) -> Result<u64> {
        if n > MAX_READ_WIDTH {
            return Err(BitsError::ReadTooWide { requested: n });
        }

        let remaining = self.remaining();
        if n > remaining {
            return Err(BitsError::Underflow {
                offset: self.position,
                requested: n,
                remaining,
            });
        }

        let input = (&self.bits.as_bytes()[self.position / 8..], self.position % 8);
        let (_, value) = take_bits(input, n).map_err(|_| BitsError::Underflow {
            offset: self.position,
            requested: n,
            remaining,
        })?;

        self.position += n;
        Ok(value)
    }

    /// Consume a single bit
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_fixed(1)? == 1)
    }

    /// Bits left before the current limit
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Bit index reads may not cross
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Narrow the limit to @end (never widening it) and return the previous limit
    pub fn narrow(&mut self, end: usize) -> usize {
        let previous = self.limit;
        self.limit = end.clamp(self.position, previous);
        previous
    }

    /// Put back a limit returned by [`BitCursor::narrow`]
    pub fn restore(&mut self, limit: usize) {
        self.limit = limit.clamp(self.position, self.bits.len());
    }

    /// Number of bits consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// True if every unread bit before the limit is zero (valid trailing padding)
    pub fn rest_is_zero(&self) -> bool {
        (self.position..self.limit).all(|i| self.bits.get(i) == Some(false))
    }
}
