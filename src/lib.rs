//! Generalized regex matching over sequences of arbitrary typed elements.
//!
//! A pattern string is compiled into a nondeterministic finite automaton
//! (tokenize, bracket resolution, infix-to-postfix, Thompson construction)
//! and executed against a slice of any element type by a backtracking
//! search. The engine never interprets elements itself: a caller-supplied
//! constructor builds a pattern atom from each literal substring, and a
//! caller-supplied predicate decides whether an atom matches an input
//! element.
//!
//! # Pattern syntax
//!
//! | Token        | Meaning                                      |
//! |--------------|----------------------------------------------|
//! | `abc`        | Literal atom (built by the constructor)      |
//! | `.`          | Any single element                           |
//! | `(…)`        | Capture group                                |
//! | `[x y z]`    | Alternation of the enclosed atoms            |
//! | `X\|Y`       | Alternation                                  |
//! | `X*` / `X*?` | Zero or more, greedy / lazy                  |
//! | `X+` / `X+?` | One or more, greedy / lazy                   |
//! | `X?`         | Zero or one                                  |
//! | `^` / `$`    | Anchor at input start / end                  |
//! | `\x`         | Literal `x`, even for operator characters    |
//!
//! Whitespace separates atoms and never matches anything.
//!
//! # Example
//!
//! ```rust
//! use seqre::{Pattern, ValueCheck};
//!
//! let pattern = Pattern::compile("(<5+) (>=7)", ValueCheck::parse).unwrap();
//! let input = [2, 3, 9];
//! let mut matcher = pattern.matcher(&input, |check, value| check.check(*value));
//!
//! assert!(matcher.matches());
//! assert_eq!(matcher.group(1).unwrap(), &[2, 3]);
//! assert_eq!(matcher.group(2).unwrap(), &[9]);
//! ```

mod error;
mod matcher;
mod nfa;
mod pattern;
mod postfix;
mod token;
mod tokenizer;
mod value_check;

pub use error::{MatchStateError, PatternError};
pub use matcher::{MatchResult, Matcher};
pub use pattern::Pattern;
pub use value_check::ValueCheck;
