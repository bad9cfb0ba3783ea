//! Compiled patterns: the public front door of the engine.

use crate::error::PatternError;
use crate::matcher::Matcher;
use crate::nfa::Nfa;
use crate::postfix::PostfixExpr;

/// A compiled pattern: anchor flags plus the automaton.
///
/// Immutable once built; one pattern can back any number of simultaneous
/// matchers, each of which owns all of its own run state.
#[derive(Debug)]
pub struct Pattern<T> {
    required_start: bool,
    required_end: bool,
    group_count: usize,
    nfa: Nfa<T>,
}

impl<T> Pattern<T> {
    /// Compile `pattern`, building each coalesced literal atom with `ctor`.
    ///
    /// `ctor` receives every literal substring of the pattern text;
    /// returning `None` aborts compilation with
    /// [`PatternError::InvalidLiteral`].
    pub fn compile<F>(pattern: &str, mut ctor: F) -> Result<Self, PatternError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        let postfix = PostfixExpr::compile(pattern, &mut ctor)?;
        let required_start = postfix.required_start;
        let required_end = postfix.required_end;
        let group_count = postfix.group_count;
        Ok(Pattern {
            required_start,
            required_end,
            group_count,
            nfa: Nfa::compile(postfix.sequence)?,
        })
    }

    /// Number of capture groups in the pattern (group 0 excluded).
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Create a matcher over `input`, using `compare` to decide whether a
    /// pattern atom matches an input element.
    pub fn matcher<'p, 'i, R, F>(&'p self, input: &'i [R], compare: F) -> Matcher<'p, 'i, T, R, F>
    where
        F: FnMut(&T, &R) -> bool,
    {
        Matcher::new(self, input, compare)
    }

    pub(crate) fn nfa(&self) -> &Nfa<T> {
        &self.nfa
    }

    pub(crate) fn required_start(&self) -> bool {
        self.required_start
    }

    pub(crate) fn required_end(&self) -> bool {
        self.required_end
    }
}
