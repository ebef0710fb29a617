// BITS-RS: decoder and evaluator for the BITS packet transmission format
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod config;
pub mod error;
pub mod formats;
pub mod packet;
pub mod transmission;

// Re-export commonly used types
pub use bitwise::{hex_to_bits, BitCursor, BitSequence};
pub use config::{ArityCheck, DecoderConfig};
pub use error::{BitsError, Result};
pub use packet::{decode, decode_hex, evaluate, version_sum, Decoder, OperatorKind, Packet};
pub use transmission::{analyze, Report, Transmission};

/// BITS-RS version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
