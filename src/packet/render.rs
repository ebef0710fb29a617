// Prefix-notation rendering of packet trees, e.g. "(< 10 20)"

use super::types::Packet;
use std::fmt;

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Literal { value, .. } => write!(f, "{}", value),
            Packet::Operator {
                kind, subpackets, ..
            } => {
                write!(f, "({}", kind.symbol())?;
                for subpacket in subpackets {
                    write!(f, " {}", subpacket)?;
                }
                write!(f, ")")
            }
        }
    }
}
