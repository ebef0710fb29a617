// Packet model, decoder and tree walks

pub mod decoder;
pub mod eval;
pub mod render;
pub mod types;

pub use decoder::{decode, decode_hex, Decoder, Framing};
pub use eval::{evaluate, version_sum};
pub use types::{OperatorKind, Packet, LITERAL_TYPE_ID};
