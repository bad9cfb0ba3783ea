//! Thompson construction: postfix sequence to automaton state arena.
//!
//! States live in an arena owned by the compiled pattern and reference each
//! other by index, so quantifier loops are plain cycles in the edge lists
//! with no ownership cycles. Greedy/lazy preference is not a flag on the
//! states: it is encoded entirely in out-edge ORDER by the patch step, and
//! the matcher simply tries edges first to last.

use crate::error::PatternError;
use crate::token::Token;

/// Index of a state in the automaton arena.
pub(crate) type StateId = usize;

/// One automaton state: its node payload plus ordered out-edges.
#[derive(Debug)]
pub(crate) struct State<T> {
    pub(crate) token: Token<T>,
    pub(crate) out: Vec<StateId>,
}

/// A compiled automaton.
#[derive(Debug)]
pub(crate) struct Nfa<T> {
    states: Vec<State<T>>,
    start: StateId,
}

/// An automaton under construction: an entry state plus the states whose
/// out-lists still await the continuation. Fragments exist only on the
/// builder stack and never survive compilation.
struct Fragment {
    start: StateId,
    dangling: Vec<StateId>,
}

impl<T> Nfa<T> {
    pub(crate) fn start(&self) -> StateId {
        self.start
    }

    pub(crate) fn state(&self, id: StateId) -> &State<T> {
        &self.states[id]
    }

    /// Build the automaton from a postfix sequence.
    ///
    /// The postfix compiler guarantees operator arity, so the fragment
    /// stack holding anything but one fragment at the end (or underflowing
    /// on a pop) is an internal inconsistency, not a user error.
    pub(crate) fn compile(sequence: Vec<Token<T>>) -> Result<Self, PatternError> {
        let mut builder = Builder {
            states: Vec::new(),
            stack: Vec::new(),
        };
        for token in sequence {
            match token {
                atom if atom.is_atom() => {
                    let id = builder.add(atom, vec![]);
                    builder.stack.push(Fragment {
                        start: id,
                        dangling: vec![id],
                    });
                }
                Token::Concat => {
                    let right = builder.pop()?;
                    let left = builder.pop()?;
                    builder.patch(&left.dangling, right.start);
                    builder.stack.push(Fragment {
                        start: left.start,
                        dangling: right.dangling,
                    });
                }
                Token::Branch => {
                    let right = builder.pop()?;
                    let left = builder.pop()?;
                    // Left alternative first: the matcher tries out-edges
                    // in order.
                    let id = builder.add(token, vec![left.start, right.start]);
                    let mut dangling = left.dangling;
                    dangling.extend(right.dangling);
                    builder.stack.push(Fragment {
                        start: id,
                        dangling,
                    });
                }
                Token::Kleene | Token::NonGreedyKleene => {
                    let body = builder.pop()?;
                    let loop_id = builder.add(token, vec![body.start]);
                    builder.patch(&body.dangling, loop_id);
                    builder.stack.push(Fragment {
                        start: loop_id,
                        dangling: vec![loop_id],
                    });
                }
                Token::Repeat | Token::NonGreedyRepeat => {
                    // Same loop state as Kleene, but placed in series after
                    // the body: one traversal is mandatory.
                    let body = builder.pop()?;
                    let loop_id = builder.add(token, vec![body.start]);
                    builder.patch(&body.dangling, loop_id);
                    builder.stack.push(Fragment {
                        start: body.start,
                        dangling: vec![loop_id],
                    });
                }
                Token::Altern => {
                    let body = builder.pop()?;
                    let id = builder.add(token, vec![body.start]);
                    let mut dangling = vec![id];
                    dangling.extend(body.dangling);
                    builder.stack.push(Fragment {
                        start: id,
                        dangling,
                    });
                }
                Token::CaptureStart(group) => {
                    // Wrap the operand between zero-width capture markers.
                    let body = builder.pop()?;
                    let end_id = builder.add(Token::CaptureEnd(group), vec![]);
                    builder.patch(&body.dangling, end_id);
                    let start_id = builder.add(Token::CaptureStart(group), vec![body.start]);
                    builder.stack.push(Fragment {
                        start: start_id,
                        dangling: vec![end_id],
                    });
                }
                _ => return Err(PatternError::MalformedPostfix),
            }
        }
        let last = builder.pop()?;
        if !builder.stack.is_empty() {
            return Err(PatternError::MalformedPostfix);
        }
        let matched = builder.add(Token::Matched, vec![]);
        builder.patch(&last.dangling, matched);
        Ok(Nfa {
            states: builder.states,
            start: last.start,
        })
    }
}

struct Builder<T> {
    states: Vec<State<T>>,
    stack: Vec<Fragment>,
}

impl<T> Builder<T> {
    fn add(&mut self, token: Token<T>, out: Vec<StateId>) -> StateId {
        self.states.push(State { token, out });
        self.states.len() - 1
    }

    fn pop(&mut self) -> Result<Fragment, PatternError> {
        self.stack.pop().ok_or(PatternError::MalformedPostfix)
    }

    /// Connect every dangling state's out-list to `target`.
    ///
    /// Lazy loop states get the target prepended, so the matcher tries the
    /// exit before the repeat; everyone else appends.
    fn patch(&mut self, dangling: &[StateId], target: StateId) {
        for &id in dangling {
            let state = &mut self.states[id];
            if state.token.is_lazy_loop() {
                state.out.insert(0, target);
            } else {
                state.out.push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postfix::PostfixExpr;

    fn nfa(pattern: &str) -> Nfa<String> {
        let expr = PostfixExpr::compile(pattern, &mut |s| Some(s.to_string()))
            .expect("compile should succeed");
        Nfa::compile(expr.sequence).expect("construction should succeed")
    }

    fn lit(text: &str) -> Token<String> {
        Token::Literal(text.to_string())
    }

    #[test]
    fn literal_chain() {
        // a -> b -> Matched
        let nfa = nfa("a b");
        let a = nfa.state(nfa.start());
        assert_eq!(a.token, lit("a"));
        let b = nfa.state(a.out[0]);
        assert_eq!(b.token, lit("b"));
        assert_eq!(nfa.state(b.out[0]).token, Token::Matched);
    }

    #[test]
    fn greedy_kleene_repeats_first() {
        let nfa = nfa("a* b");
        let head = nfa.state(nfa.start());
        assert_eq!(head.token, Token::Kleene);
        assert_eq!(nfa.state(head.out[0]).token, lit("a"));
        assert_eq!(nfa.state(head.out[1]).token, lit("b"));
    }

    #[test]
    fn lazy_kleene_exits_first() {
        let nfa = nfa("a*? b");
        let head = nfa.state(nfa.start());
        assert_eq!(head.token, Token::NonGreedyKleene);
        assert_eq!(nfa.state(head.out[0]).token, lit("b"));
        assert_eq!(nfa.state(head.out[1]).token, lit("a"));
    }

    #[test]
    fn repeat_starts_at_body() {
        // One traversal of the body is mandatory before the loop state.
        let nfa = nfa("a+");
        let a = nfa.state(nfa.start());
        assert_eq!(a.token, lit("a"));
        let head = nfa.state(a.out[0]);
        assert_eq!(head.token, Token::Repeat);
        assert_eq!(nfa.state(head.out[0]).token, lit("a"));
        assert_eq!(nfa.state(head.out[1]).token, Token::Matched);
    }

    #[test]
    fn lazy_repeat_exit_precedes_loop() {
        let nfa = nfa("a+? b");
        let a = nfa.state(nfa.start());
        let head = nfa.state(a.out[0]);
        assert_eq!(head.token, Token::NonGreedyRepeat);
        assert_eq!(nfa.state(head.out[0]).token, lit("b"));
        assert_eq!(nfa.state(head.out[1]).token, lit("a"));
    }

    #[test]
    fn branch_prefers_left() {
        let nfa = nfa("a|b");
        let split = nfa.state(nfa.start());
        assert_eq!(split.token, Token::Branch);
        assert_eq!(nfa.state(split.out[0]).token, lit("a"));
        assert_eq!(nfa.state(split.out[1]).token, lit("b"));
    }

    #[test]
    fn altern_tries_body_then_skip() {
        let nfa = nfa("a? b");
        let head = nfa.state(nfa.start());
        assert_eq!(head.token, Token::Altern);
        assert_eq!(nfa.state(head.out[0]).token, lit("a"));
        assert_eq!(nfa.state(head.out[1]).token, lit("b"));
    }

    #[test]
    fn capture_wraps_body() {
        // CapStart -> a -> CapEnd -> Matched, markers zero-width.
        let nfa = nfa("(a)");
        let open = nfa.state(nfa.start());
        assert_eq!(open.token, Token::CaptureStart(1));
        let a = nfa.state(open.out[0]);
        assert_eq!(a.token, lit("a"));
        let close = nfa.state(a.out[0]);
        assert_eq!(close.token, Token::CaptureEnd(1));
        assert_eq!(nfa.state(close.out[0]).token, Token::Matched);
    }

    #[test]
    fn structural_token_in_postfix_is_internal_error() {
        let err = Nfa::<String>::compile(vec![Token::Concat]).unwrap_err();
        assert_eq!(err, PatternError::MalformedPostfix);
        let err = Nfa::<String>::compile(vec![Token::LParen(1)]).unwrap_err();
        assert_eq!(err, PatternError::MalformedPostfix);
    }
}
