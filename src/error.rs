//! Error types for pattern compilation and match-state queries.

use std::error::Error;
use std::fmt;

/// Errors that can occur while compiling a pattern string.
///
/// All variants are fatal for the compile call; no partial pattern is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A trailing `\` with nothing left to escape.
    DanglingEscape,
    /// An operator or escape inside `[...]`, which may hold only atoms.
    OperatorInBrackets,
    /// `()` or `[]` not matched.
    UnmatchedGroup,
    /// A quantifier or alternation with nothing to apply to.
    MissingOperand(&'static str),
    /// `()` or `[]` enclosing no atoms.
    EmptyGroup,
    /// A pattern with no atoms at all.
    EmptyPattern,
    /// The element constructor rejected a literal atom.
    InvalidLiteral(String),
    /// Internal postfix/stack-shape inconsistency.
    MalformedPostfix,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingEscape => write!(f, "Trailing escape with no following character"),
            Self::OperatorInBrackets => write!(f, "Operators may not appear between \"[]\""),
            Self::UnmatchedGroup => write!(f, "\"()\" or \"[]\" not matched"),
            Self::MissingOperand(op) => write!(f, "No operand for '{op}'"),
            Self::EmptyGroup => write!(f, "Empty \"()\" or \"[]\" group"),
            Self::EmptyPattern => write!(f, "Pattern contains no atoms"),
            Self::InvalidLiteral(text) => write!(f, "Invalid literal atom: {text:?}"),
            Self::MalformedPostfix => write!(f, "Malformed postfix sequence"),
        }
    }
}

impl Error for PatternError {}

/// Errors raised when match results are queried at the wrong time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStateError {
    /// A group or result was requested before a successful match.
    NoMatch,
    /// A group id beyond the compiled group count.
    GroupOutOfRange { id: usize, count: usize },
}

impl fmt::Display for MatchStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "No successful match to query"),
            Self::GroupOutOfRange { id, count } => {
                write!(f, "Group {id} out of range (pattern has {count} groups)")
            }
        }
    }
}

impl Error for MatchStateError {}
