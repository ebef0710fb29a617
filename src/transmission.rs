// A fully decoded transmission and the two figures reported for it

use crate::bitwise::{BitCursor, BitSequence};
use crate::config::DecoderConfig;
use crate::error::Result;
use crate::packet::{Decoder, Packet};
use serde::Serialize;

/// The results handed back to the caller for one transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub version_sum: u64,
    pub value: u128,
}

/// The root packet of a transmission plus the padding that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub packet: Packet,
    pub bit_len: usize,
    pub trailing_bits: usize,
}

impl Transmission {
    /// Transcode @hex and decode its root packet
    pub fn decode(hex: &str, config: &DecoderConfig) -> Result<Self> {
        let bits = BitSequence::from_hex(hex)?;
        let mut cursor = BitCursor::new(&bits);
        let packet = Decoder::new(config.clone()).decode(&mut cursor)?;

        let trailing_bits = cursor.remaining();
        if !cursor.rest_is_zero() {
            tracing::warn!(
                offset = cursor.position(),
                trailing_bits,
                "transmission has non-zero bits after the root packet"
            );
        }
        tracing::debug!(
            bit_len = bits.len(),
            packets = packet.packet_count(),
            depth = packet.depth(),
            "decoded transmission"
        );

        Ok(Self {
            packet,
            bit_len: bits.len(),
            trailing_bits,
        })
    }

    pub fn report(&self) -> Result<Report> {
        Ok(Report {
            version_sum: self.packet.version_sum(),
            value: self.packet.evaluate()?,
        })
    }
}

/// Decode @hex and compute its version sum and value
pub fn analyze(hex: &str, config: &DecoderConfig) -> Result<Report> {
    Transmission::decode(hex, config)?.report()
}
