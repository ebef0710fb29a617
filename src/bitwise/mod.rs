// Bit-level input handling: hex transcoding and the read cursor

pub mod cursor;
pub mod hex;

pub use cursor::{BitCursor, MAX_READ_WIDTH};
pub use hex::{hex_to_bits, BitSequence};
