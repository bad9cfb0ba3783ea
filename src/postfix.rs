//! Infix-to-postfix transformation of the token stream.
//!
//! Classic operator-precedence resolution with two counters per nesting
//! level: implicit concatenation is emitted as soon as two atoms pend (so
//! it binds tighter than everything), while alternation is counted and
//! flushed only at group close or end of input (lowest precedence).

use crate::error::PatternError;
use crate::token::Token;
use crate::tokenizer::tokenize;

/// A pattern compiled to postfix (reverse-Polish) order, plus the anchor
/// flags and capture-group count collected by the tokenizer.
#[derive(Debug)]
pub(crate) struct PostfixExpr<T> {
    pub(crate) sequence: Vec<Token<T>>,
    pub(crate) required_start: bool,
    pub(crate) required_end: bool,
    pub(crate) group_count: usize,
}

impl<T> PostfixExpr<T> {
    /// Tokenize `pattern` and reorder it into postfix form.
    pub(crate) fn compile<F>(pattern: &str, ctor: &mut F) -> Result<Self, PatternError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        let stream = tokenize(pattern, ctor)?;
        Ok(PostfixExpr {
            sequence: to_postfix(stream.tokens)?,
            required_start: stream.required_start,
            required_end: stream.required_end,
            group_count: stream.group_count,
        })
    }
}

/// An opener awaiting its matching close.
enum Opener {
    Paren(usize),
    Bracket,
}

fn to_postfix<T>(tokens: Vec<Token<T>>) -> Result<Vec<Token<T>>, PatternError> {
    let mut sequence = Vec::with_capacity(tokens.len());
    let mut openers: Vec<Opener> = Vec::new();
    // Saved (atom_count, branch_count) of every enclosing level.
    let mut levels: Vec<(usize, usize)> = Vec::new();
    let mut atom_count = 0usize;
    let mut branch_count = 0usize;

    for token in tokens {
        match token {
            atom if atom.is_atom() => {
                if atom_count >= 2 {
                    sequence.push(Token::Concat);
                    atom_count -= 1;
                }
                sequence.push(atom);
                atom_count += 1;
            }
            quant if quant.is_quantifier() => {
                if atom_count == 0 {
                    return Err(PatternError::MissingOperand(quant.symbol()));
                }
                sequence.push(quant);
            }
            Token::LParen(id) => {
                if atom_count >= 2 {
                    sequence.push(Token::Concat);
                    atom_count -= 1;
                }
                levels.push((atom_count, branch_count));
                atom_count = 0;
                branch_count = 0;
                openers.push(Opener::Paren(id));
            }
            Token::LBracket => {
                if atom_count >= 2 {
                    sequence.push(Token::Concat);
                    atom_count -= 1;
                }
                levels.push((atom_count, branch_count));
                atom_count = 0;
                branch_count = 0;
                openers.push(Opener::Bracket);
            }
            Token::RParen | Token::RBracket => {
                let capture = match (openers.pop(), &token) {
                    (Some(Opener::Paren(id)), Token::RParen) => Some(id),
                    (Some(Opener::Bracket), Token::RBracket) => None,
                    _ => return Err(PatternError::UnmatchedGroup),
                };
                if atom_count == 0 {
                    return Err(PatternError::EmptyGroup);
                }
                while atom_count >= 2 {
                    sequence.push(Token::Concat);
                    atom_count -= 1;
                }
                while branch_count >= 1 {
                    sequence.push(Token::Branch);
                    branch_count -= 1;
                }
                let (outer_atoms, outer_branches) =
                    levels.pop().ok_or(PatternError::MalformedPostfix)?;
                // The whole group now counts as one atom of the outer level.
                atom_count = outer_atoms + 1;
                branch_count = outer_branches;
                if let Some(id) = capture {
                    sequence.push(Token::CaptureStart(id));
                }
            }
            Token::Branch => {
                if atom_count == 0 {
                    return Err(PatternError::MissingOperand("|"));
                }
                while atom_count >= 2 {
                    sequence.push(Token::Concat);
                    atom_count -= 1;
                }
                atom_count = 0;
                branch_count += 1;
            }
            _ => return Err(PatternError::MalformedPostfix),
        }
    }

    if !openers.is_empty() {
        return Err(PatternError::UnmatchedGroup);
    }
    if atom_count == 0 {
        return Err(if branch_count > 0 {
            PatternError::MissingOperand("|")
        } else {
            PatternError::EmptyPattern
        });
    }
    while atom_count >= 2 {
        sequence.push(Token::Concat);
        atom_count -= 1;
    }
    while branch_count >= 1 {
        sequence.push(Token::Branch);
        branch_count -= 1;
    }
    Ok(sequence)
}
