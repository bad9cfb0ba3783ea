//! Integer comparator atoms for matching numeric sequences.

use phf::{Map, phf_map};

/// Comparison operator of a [`ValueCheck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckOp {
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Equal,
    NotEqual,
    Divisible,
}

/// Map of operator spellings to comparison ops.
const OP_MAP: Map<&'static str, CheckOp> = phf_map! {
    "<" => CheckOp::Less,
    "<=" => CheckOp::LessEq,
    ">" => CheckOp::Greater,
    ">=" => CheckOp::GreaterEq,
    "=" => CheckOp::Equal,
    "!=" => CheckOp::NotEqual,
    "%" => CheckOp::Divisible,
};

/// One numeric predicate parsed from a pattern literal such as `<3`,
/// `>=2`, `=5`, `!=0` or `%2` (divisibility).
///
/// ```rust
/// use seqre::ValueCheck;
///
/// let check = ValueCheck::parse("<3").unwrap();
/// assert!(check.check(2));
/// assert!(!check.check(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCheck {
    op: CheckOp,
    operand: i64,
}

impl ValueCheck {
    /// Parse one atom. Returns `None` on an unknown operator or a bad
    /// operand, which makes this directly usable as a `Pattern::compile`
    /// element constructor.
    pub fn parse(text: &str) -> Option<Self> {
        let split = text
            .find(|ch: char| ch.is_ascii_digit() || ch == '-')
            .unwrap_or(text.len());
        let op = *OP_MAP.get(&text[..split])?;
        let operand = text[split..].parse::<i64>().ok()?;
        if op == CheckOp::Divisible && operand == 0 {
            return None;
        }
        Some(ValueCheck { op, operand })
    }

    /// Test one input value against this predicate.
    pub fn check(&self, value: i64) -> bool {
        match self.op {
            CheckOp::Less => value < self.operand,
            CheckOp::LessEq => value <= self.operand,
            CheckOp::Greater => value > self.operand,
            CheckOp::GreaterEq => value >= self.operand,
            CheckOp::Equal => value == self.operand,
            CheckOp::NotEqual => value != self.operand,
            CheckOp::Divisible => value % self.operand == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(text: &str) -> ValueCheck {
        ValueCheck::parse(text).expect("parse should succeed")
    }

    // --- Parsing ---

    #[test]
    fn parses_single_char_operators() {
        assert!(parse_ok("<3").check(2));
        assert!(parse_ok(">2").check(9));
        assert!(parse_ok("=5").check(5));
        assert!(parse_ok("%2").check(10));
    }

    #[test]
    fn parses_two_char_operators() {
        assert!(parse_ok("<=3").check(3));
        assert!(parse_ok(">=3").check(3));
        assert!(parse_ok("!=3").check(4));
    }

    #[test]
    fn parses_negative_operands() {
        assert!(parse_ok("<-3").check(-5));
        assert!(!parse_ok("<-3").check(0));
        assert!(parse_ok("=-1").check(-1));
    }

    #[test]
    fn rejects_malformed_atoms() {
        assert_eq!(ValueCheck::parse(""), None);
        assert_eq!(ValueCheck::parse("3"), None);
        assert_eq!(ValueCheck::parse("<"), None);
        assert_eq!(ValueCheck::parse("<>"), None);
        assert_eq!(ValueCheck::parse("q3"), None);
        assert_eq!(ValueCheck::parse("<3x"), None);
    }

    #[test]
    fn rejects_division_by_zero() {
        assert_eq!(ValueCheck::parse("%0"), None);
    }

    // --- Semantics ---

    #[test]
    fn comparison_boundaries() {
        assert!(!parse_ok("<3").check(3));
        assert!(parse_ok("<=3").check(3));
        assert!(!parse_ok(">3").check(3));
        assert!(parse_ok(">=3").check(3));
    }

    #[test]
    fn divisibility() {
        assert!(parse_ok("%3").check(9));
        assert!(parse_ok("%3").check(0));
        assert!(!parse_ok("%3").check(10));
    }
}
