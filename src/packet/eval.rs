// Post-order walks over a decoded packet tree
// Reference: BITS comparison operators yield 1 or 0 from exactly two operands

use super::types::{OperatorKind, Packet};
use crate::error::{BitsError, Result};

/// Sum of the version field of every node, root included
pub fn version_sum(packet: &Packet) -> u64 {
    u64::from(packet.version())
        + packet
            .subpackets()
            .iter()
            .map(version_sum)
            .sum::<u64>()
}

/// Evaluate the expression rooted at @packet.
///
/// Recurses once per nesting level; trees produced by the decoder are bounded
/// by `DecoderConfig::max_depth`.
pub fn evaluate(packet: &Packet) -> Result<u128> {
    match packet {
        Packet::Literal { value, .. } => Ok(*value),
        Packet::Operator {
            kind, subpackets, ..
        } => {
            if kind.is_comparison() && subpackets.len() != 2 {
                return Err(BitsError::Arity {
                    kind: *kind,
                    count: subpackets.len(),
                    offset: None,
                });
            }
            if subpackets.is_empty() {
                return Err(BitsError::EmptyOperator {
                    kind: *kind,
                    offset: None,
                });
            }

            let operands = subpackets
                .iter()
                .map(evaluate)
                .collect::<Result<Vec<_>>>()?;
            combine(*kind, &operands)
        }
    }
}

fn combine(kind: OperatorKind, operands: &[u128]) -> Result<u128> {
    let overflow = || BitsError::Overflow { offset: None };

    let value = match kind {
        OperatorKind::Sum => operands
            .iter()
            .try_fold(0u128, |acc, &v| acc.checked_add(v))
            .ok_or_else(overflow)?,
        OperatorKind::Product => operands
            .iter()
            .try_fold(1u128, |acc, &v| acc.checked_mul(v))
            .ok_or_else(overflow)?,
        OperatorKind::Min => operands.iter().copied().min().unwrap_or_default(),
        OperatorKind::Max => operands.iter().copied().max().unwrap_or_default(),
        OperatorKind::GreaterThan => u128::from(operands[0] > operands[1]),
        OperatorKind::LessThan => u128::from(operands[0] < operands[1]),
        OperatorKind::EqualTo => u128::from(operands[0] == operands[1]),
    };

    Ok(value)
}

impl Packet {
    /// See [`evaluate`]
    pub fn evaluate(&self) -> Result<u128> {
        evaluate(self)
    }

    /// See [`version_sum`]
    pub fn version_sum(&self) -> u64 {
        version_sum(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::decode_hex;

    fn lit(value: u128) -> Packet {
        Packet::literal(0, value)
    }

    #[test]
    fn test_version_sums() {
        let cases = [
            ("D2FE28", 6),
            ("38006F45291200", 9),
            ("EE00D40C823060", 14),
            ("8A004A801A8002F478", 16),
            ("620080001611562C8802118E34", 12),
            ("C0015000016115A2E0802F182340", 23),
            ("A0016C880162017C3686B18A3D4780", 31),
        ];
        for (hex, expected) in cases {
            let packet = decode_hex(hex).unwrap();
            assert_eq!(version_sum(&packet), expected, "{}", hex);
        }
    }

    #[test]
    fn test_version_sum_counts_every_node() {
        let packet = Packet::operator(
            7,
            OperatorKind::Sum,
            vec![
                Packet::literal(7, 0),
                Packet::operator(7, OperatorKind::Min, vec![Packet::literal(7, 9)]),
            ],
        );
        assert_eq!(packet.version_sum(), 28);
    }

    #[test]
    fn test_evaluate_examples() {
        let cases = [
            ("C200B40A82", 3),
            ("04005AC33890", 54),
            ("880086C3E88112", 7),
            ("CE00C43D881120", 9),
            ("D8005AC2A8F0", 1),
            ("F600BC2D8F", 0),
            ("9C005AC2F8F0", 0),
            ("9C0141080250320F1802104A08", 1),
            ("38006F45291200", 1),
            ("EE00D40C823060", 3),
        ];
        for (hex, expected) in cases {
            let packet = decode_hex(hex).unwrap();
            assert_eq!(evaluate(&packet).unwrap(), expected, "{}", hex);
        }
    }

    #[test]
    fn test_evaluate_literal() {
        for value in [0, 1, 2021, u64::MAX as u128, u128::MAX] {
            assert_eq!(Packet::literal(3, value).evaluate().unwrap(), value);
        }
    }

    #[test]
    fn test_single_operand() {
        for kind in [
            OperatorKind::Sum,
            OperatorKind::Product,
            OperatorKind::Min,
            OperatorKind::Max,
        ] {
            let packet = Packet::operator(0, kind, vec![lit(42)]);
            assert_eq!(packet.evaluate().unwrap(), 42, "{}", kind);
        }
    }

    #[test]
    fn test_comparison_arity() {
        for kind in [
            OperatorKind::GreaterThan,
            OperatorKind::LessThan,
            OperatorKind::EqualTo,
        ] {
            for count in [1, 3] {
                let packet = Packet::operator(0, kind, (0..count).map(lit).collect());
                assert_eq!(
                    packet.evaluate().unwrap_err(),
                    BitsError::Arity {
                        kind,
                        count: count as usize,
                        offset: None
                    }
                );
            }
        }
    }

    #[test]
    fn test_arity_error_from_decoded_tree() {
        let packet = decode_hex("1A00C40882106").unwrap();
        assert!(matches!(
            packet.evaluate().unwrap_err(),
            BitsError::Arity { count: 3, .. }
        ));
    }

    #[test]
    fn test_arity_error_in_nested_operand() {
        let packet = Packet::operator(
            0,
            OperatorKind::Sum,
            vec![
                lit(1),
                Packet::operator(0, OperatorKind::EqualTo, vec![lit(1)]),
            ],
        );
        assert!(matches!(
            packet.evaluate().unwrap_err(),
            BitsError::Arity { count: 1, .. }
        ));
    }

    #[test]
    fn test_empty_operator() {
        let packet = Packet::operator(0, OperatorKind::Max, vec![]);
        assert_eq!(
            packet.evaluate().unwrap_err(),
            BitsError::EmptyOperator {
                kind: OperatorKind::Max,
                offset: None
            }
        );
    }

    #[test]
    fn test_overflow() {
        let packet = Packet::operator(0, OperatorKind::Sum, vec![lit(u128::MAX), lit(1)]);
        assert_eq!(
            packet.evaluate().unwrap_err(),
            BitsError::Overflow { offset: None }
        );

        let packet = Packet::operator(0, OperatorKind::Product, vec![lit(1u128 << 64), lit(1u128 << 64)]);
        assert!(packet.evaluate().is_err());
    }

    #[test]
    fn test_wide_values() {
        let big = (u64::MAX as u128) * 4;
        let packet = Packet::operator(0, OperatorKind::Sum, vec![lit(big), lit(big)]);
        assert_eq!(packet.evaluate().unwrap(), big * 2);
    }
}
