// Recursive-descent packet decoder
// Reference: BITS header (3-bit version, 3-bit type id), length type 0 (15-bit bit count)
// and length type 1 (11-bit subpacket count)

use super::types::{OperatorKind, Packet};
use crate::bitwise::{BitCursor, BitSequence};
use crate::config::{ArityCheck, DecoderConfig};
use crate::error::{BitsError, Result};

const VERSION_BITS: usize = 3;
const TYPE_ID_BITS: usize = 3;
const GROUP_BITS: usize = 5;
const GROUP_CONTINUE: u64 = 0b1_0000;
const GROUP_NIBBLE: u64 = 0b0_1111;
const TOTAL_LENGTH_BITS: usize = 15;
const SUBPACKET_COUNT_BITS: usize = 11;

/// How an operator discloses the extent of its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Length type 0: children occupy exactly this many bits
    TotalLength(usize),
    /// Length type 1: exactly this many children follow
    Count(usize),
}

impl Framing {
    fn read(cursor: &mut BitCursor<'_>) -> Result<Self> {
        if cursor.read_bit()? {
            Ok(Framing::Count(cursor.read_fixed(SUBPACKET_COUNT_BITS)? as usize))
        } else {
            Ok(Framing::TotalLength(
                cursor.read_fixed(TOTAL_LENGTH_BITS)? as usize,
            ))
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Framing::TotalLength(0) | Framing::Count(0))
    }
}

/// Decodes packets from a cursor according to a [`DecoderConfig`]
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decode one packet (and its whole subtree) starting at the cursor.
    ///
    /// Bits after the packet are left unread.
    pub fn decode(&self, cursor: &mut BitCursor<'_>) -> Result<Packet> {
        self.decode_packet(cursor, 0)
    }

    fn decode_packet(&self, cursor: &mut BitCursor<'_>, depth: usize) -> Result<Packet> {
        let offset = cursor.position();
        if depth > self.config.max_depth {
            return Err(BitsError::TooDeep { depth, offset });
        }

        let version = cursor.read_fixed(VERSION_BITS)? as u8;
        let type_id = cursor.read_fixed(TYPE_ID_BITS)? as u8;

        let Some(kind) = OperatorKind::from_type_id(type_id) else {
            let value = decode_literal_value(cursor)?;
            tracing::trace!(offset, version, value = %value, "literal packet");
            return Ok(Packet::Literal { version, value });
        };

        let framing = Framing::read(cursor)?;
        tracing::debug!(offset, version, %kind, ?framing, depth, "operator packet");

        if framing.is_empty() {
            return Err(BitsError::EmptyOperator {
                kind,
                offset: Some(offset),
            });
        }

        let subpackets = self.decode_subpackets(cursor, framing, depth)?;

        if self.config.arity_check == ArityCheck::Eager
            && kind.is_comparison()
            && subpackets.len() != 2
        {
            return Err(BitsError::Arity {
                kind,
                count: subpackets.len(),
                offset: Some(offset),
            });
        }

        Ok(Packet::Operator {
            version,
            kind,
            subpackets,
        })
    }

    fn decode_subpackets(
        &self,
        cursor: &mut BitCursor<'_>,
        framing: Framing,
        depth: usize,
    ) -> Result<Vec<Packet>> {
        let mut subpackets = Vec::new();

        match framing {
            Framing::TotalLength(declared) => {
                let start = cursor.position();
                let end = start + declared;
                let within_data = end <= cursor.limit();

                let outer = cursor.narrow(end);
                let mut consumed = 0;
                let run = loop {
                    if consumed == declared {
                        break Ok(());
                    }
                    match self.decode_packet(cursor, depth + 1) {
                        Ok(packet) => {
                            subpackets.push(packet);
                            consumed = cursor.position() - start;
                        }
                        Err(err) => break Err(err),
                    }
                };
                cursor.restore(outer);

                match run {
                    // The declared run lies inside the data, so running out of bits
                    // means the children did not end on its boundary
                    Err(BitsError::Underflow { .. }) if within_data => {
                        return Err(BitsError::Framing {
                            offset: start + consumed,
                            declared,
                            consumed,
                        });
                    }
                    other => other?,
                }
            }
            Framing::Count(count) => {
                subpackets.reserve(count);
                for _ in 0..count {
                    subpackets.push(self.decode_packet(cursor, depth + 1)?);
                }
            }
        }

        Ok(subpackets)
    }
}

/// Read 5-bit groups until one with a clear continuation flag, concatenating nibbles
fn decode_literal_value(cursor: &mut BitCursor<'_>) -> Result<u128> {
    let mut value: u128 = 0;

    loop {
        let offset = cursor.position();
        let group = cursor.read_fixed(GROUP_BITS)?;

        if value >> (u128::BITS - 4) != 0 {
            return Err(BitsError::Overflow {
                offset: Some(offset),
            });
        }
        value = (value << 4) | u128::from(group & GROUP_NIBBLE);

        if group & GROUP_CONTINUE == 0 {
            return Ok(value);
        }
    }
}

/// Decode one packet from a fresh cursor using the default configuration
pub fn decode(cursor: &mut BitCursor<'_>) -> Result<Packet> {
    Decoder::default().decode(cursor)
}

/// Transcode @hex and decode the packet at its start
pub fn decode_hex(hex: &str) -> Result<Packet> {
    let bits = BitSequence::from_hex(hex)?;
    decode(&mut BitCursor::new(&bits))
}
