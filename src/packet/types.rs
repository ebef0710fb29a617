// Packet data model
// Reference: BITS type ids 0-3 and 5-7 are operators, 4 is a literal

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type id carried by literal packets
pub const LITERAL_TYPE_ID: u8 = 4;

/// Combining rule of an operator packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    Sum,
    Product,
    Min,
    Max,
    GreaterThan,
    LessThan,
    EqualTo,
}

impl OperatorKind {
    /// Resolve a 3-bit type id; returns None for the literal tag
    pub fn from_type_id(type_id: u8) -> Option<Self> {
        if type_id == LITERAL_TYPE_ID {
            return None;
        }
        match type_id {
            0 => Some(OperatorKind::Sum),
            1 => Some(OperatorKind::Product),
            2 => Some(OperatorKind::Min),
            3 => Some(OperatorKind::Max),
            5 => Some(OperatorKind::GreaterThan),
            6 => Some(OperatorKind::LessThan),
            7 => Some(OperatorKind::EqualTo),
            _ => None,
        }
    }

    pub fn type_id(&self) -> u8 {
        match self {
            OperatorKind::Sum => 0,
            OperatorKind::Product => 1,
            OperatorKind::Min => 2,
            OperatorKind::Max => 3,
            OperatorKind::GreaterThan => 5,
            OperatorKind::LessThan => 6,
            OperatorKind::EqualTo => 7,
        }
    }

    /// Comparison kinds take exactly two operands
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            OperatorKind::GreaterThan | OperatorKind::LessThan | OperatorKind::EqualTo
        )
    }

    /// Short symbol used by the expression renderer
    pub fn symbol(&self) -> &'static str {
        match self {
            OperatorKind::Sum => "+",
            OperatorKind::Product => "*",
            OperatorKind::Min => "min",
            OperatorKind::Max => "max",
            OperatorKind::GreaterThan => ">",
            OperatorKind::LessThan => "<",
            OperatorKind::EqualTo => "=",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatorKind::Sum => "Sum",
            OperatorKind::Product => "Product",
            OperatorKind::Min => "Min",
            OperatorKind::Max => "Max",
            OperatorKind::GreaterThan => "GreaterThan",
            OperatorKind::LessThan => "LessThan",
            OperatorKind::EqualTo => "EqualTo",
        };
        f.write_str(name)
    }
}

/// One decoded node of a transmission.
///
/// Literal values are held in a `u128`; the decoder rejects literals whose
/// significant bits do not fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Packet {
    Literal {
        version: u8,
        value: u128,
    },
    Operator {
        version: u8,
        kind: OperatorKind,
        subpackets: Vec<Packet>,
    },
}

impl Packet {
    pub fn literal(version: u8, value: u128) -> Self {
        Packet::Literal { version, value }
    }

    pub fn operator(version: u8, kind: OperatorKind, subpackets: Vec<Packet>) -> Self {
        Packet::Operator {
            version,
            kind,
            subpackets,
        }
    }

    pub fn version(&self) -> u8 {
        match self {
            Packet::Literal { version, .. } | Packet::Operator { version, .. } => *version,
        }
    }

    /// Operator kind, or None for a literal
    pub fn kind(&self) -> Option<OperatorKind> {
        match self {
            Packet::Literal { .. } => None,
            Packet::Operator { kind, .. } => Some(*kind),
        }
    }

    /// Child packets in transmission order; empty for literals
    pub fn subpackets(&self) -> &[Packet] {
        match self {
            Packet::Literal { .. } => &[],
            Packet::Operator { subpackets, .. } => subpackets,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Packet::Literal { .. })
    }

    /// Total number of nodes in this subtree, including self
    pub fn packet_count(&self) -> usize {
        1 + self
            .subpackets()
            .iter()
            .map(Packet::packet_count)
            .sum::<usize>()
    }

    /// Nesting depth; a bare literal has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .subpackets()
            .iter()
            .map(Packet::depth)
            .max()
            .unwrap_or(0)
    }
}
