// Error kinds raised while transcoding, decoding and evaluating transmissions

use crate::packet::OperatorKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    #[error("Invalid hex digit {character:?} at index {index}")]
    Format { character: char, index: usize },

    #[error("Transmission truncated at bit {offset}: need {requested} bits, have {remaining}")]
    Underflow {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    #[error("Cannot read {requested} bits into a single field (max 64)")]
    ReadTooWide { requested: usize },

    #[error(
        "Subpacket run ending at bit {offset} spans {consumed} bits, declared length is {declared}"
    )]
    Framing {
        offset: usize,
        declared: usize,
        consumed: usize,
    },

    #[error("{kind} operator needs exactly 2 operands, got {count}")]
    Arity {
        kind: OperatorKind,
        count: usize,
        offset: Option<usize>,
    },

    #[error("{kind} operator has no operands")]
    EmptyOperator {
        kind: OperatorKind,
        offset: Option<usize>,
    },

    #[error("Value does not fit in 128 bits")]
    Overflow { offset: Option<usize> },

    #[error("Operator nesting depth {depth} at bit {offset} exceeds the configured limit")]
    TooDeep { depth: usize, offset: usize },
}

impl BitsError {
    /// Bit offset at which the error was detected, when one is known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BitsError::Format { index, .. } => Some(index * 4),
            BitsError::Underflow { offset, .. }
            | BitsError::Framing { offset, .. }
            | BitsError::TooDeep { offset, .. } => Some(*offset),
            BitsError::Arity { offset, .. }
            | BitsError::EmptyOperator { offset, .. }
            | BitsError::Overflow { offset } => *offset,
            BitsError::ReadTooWide { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BitsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let err = BitsError::Format {
            character: 'g',
            index: 3,
        };
        assert_eq!(err.offset(), Some(12));

        let err = BitsError::Underflow {
            offset: 21,
            requested: 5,
            remaining: 3,
        };
        assert_eq!(err.offset(), Some(21));

        let err = BitsError::Arity {
            kind: OperatorKind::EqualTo,
            count: 3,
            offset: None,
        };
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_display() {
        let err = BitsError::Arity {
            kind: OperatorKind::LessThan,
            count: 1,
            offset: Some(0),
        };
        assert_eq!(err.to_string(), "LessThan operator needs exactly 2 operands, got 1");

        let err = BitsError::Framing {
            offset: 49,
            declared: 27,
            consumed: 28,
        };
        assert!(err.to_string().contains("declared length is 27"));
    }
}
