//! Tokenizer and bracket resolver for pattern strings.
//!
//! Turns raw pattern text into a flat node sequence: anchors are stripped
//! into flags, whitespace runs act only as atom boundaries, adjacent
//! ordinary characters coalesce into literal atoms, and `[...]` groups are
//! rewritten into explicit alternation chains.

use std::iter::Peekable;
use std::str::Chars;

use itertools::Itertools;

use crate::error::PatternError;
use crate::token::Token;

/// A tokenized pattern: the node sequence plus everything collected on the
/// way through the text.
#[derive(Debug)]
pub(crate) struct TokenStream<T> {
    pub(crate) tokens: Vec<Token<T>>,
    pub(crate) required_start: bool,
    pub(crate) required_end: bool,
    pub(crate) group_count: usize,
}

/// Tokenize `pattern`, building literal atoms with `ctor`.
pub(crate) fn tokenize<T, F>(pattern: &str, ctor: &mut F) -> Result<TokenStream<T>, PatternError>
where
    F: FnMut(&str) -> Option<T>,
{
    let (body, required_start, required_end) = strip_anchors(pattern);
    let mut tokenizer = Tokenizer {
        chars: body.chars().peekable(),
        tokens: Vec::new(),
        buffer: String::new(),
        group_count: 0,
    };
    tokenizer.run(ctor)?;
    let Tokenizer {
        tokens, group_count, ..
    } = tokenizer;
    Ok(TokenStream {
        tokens: resolve_brackets(tokens)?,
        required_start,
        required_end,
        group_count,
    })
}

/// Collapse whitespace runs to single spaces and strip the `^`/`$` anchors
/// off the ends of the text.
fn strip_anchors(pattern: &str) -> (String, bool, bool) {
    let mut body = pattern.split_whitespace().join(" ");
    let required_start = body.starts_with('^');
    if required_start {
        body.remove(0);
    }
    let required_end = body.ends_with('$');
    if required_end {
        body.pop();
    }
    (body, required_start, required_end)
}

/// Characters that terminate a literal run.
fn is_special(ch: char) -> bool {
    matches!(
        ch,
        '?' | '(' | ')' | '[' | ']' | '|' | '.' | '+' | '*' | '\\' | ' '
    )
}

struct Tokenizer<'a, T> {
    chars: Peekable<Chars<'a>>,
    tokens: Vec<Token<T>>,
    buffer: String,
    group_count: usize,
}

impl<T> Tokenizer<'_, T> {
    fn run<F>(&mut self, ctor: &mut F) -> Result<(), PatternError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        while let Some(ch) = self.chars.next() {
            match ch {
                '?' => self.operator(Token::Altern, ctor)?,
                ')' => self.operator(Token::RParen, ctor)?,
                '[' => self.operator(Token::LBracket, ctor)?,
                ']' => self.operator(Token::RBracket, ctor)?,
                '|' => self.operator(Token::Branch, ctor)?,
                '.' => self.operator(Token::Wildcard, ctor)?,
                '(' => {
                    self.group_count += 1;
                    self.operator(Token::LParen(self.group_count), ctor)?;
                }
                ' ' => self.flush(ctor)?,
                '+' | '*' => {
                    let lazy = self.chars.next_if_eq(&'?').is_some();
                    let token = match (ch, lazy) {
                        ('+', false) => Token::Repeat,
                        ('+', true) => Token::NonGreedyRepeat,
                        ('*', false) => Token::Kleene,
                        _ => Token::NonGreedyKleene,
                    };
                    self.operator(token, ctor)?;
                }
                '\\' => match self.chars.next() {
                    Some(escaped) => self.buffer.push(escaped),
                    None => return Err(PatternError::DanglingEscape),
                },
                other => {
                    self.buffer.push(other);
                    self.buffer
                        .extend(self.chars.peeking_take_while(|&c| !is_special(c)));
                }
            }
        }
        self.flush(ctor)
    }

    /// Flush the pending literal, then emit `token`.
    fn operator<F>(&mut self, token: Token<T>, ctor: &mut F) -> Result<(), PatternError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.flush(ctor)?;
        self.tokens.push(token);
        Ok(())
    }

    /// Flush the pending literal buffer through the element constructor.
    fn flush<F>(&mut self, ctor: &mut F) -> Result<(), PatternError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let atom =
            ctor(&self.buffer).ok_or_else(|| PatternError::InvalidLiteral(self.buffer.clone()))?;
        self.tokens.push(Token::Literal(atom));
        self.buffer.clear();
        Ok(())
    }
}

/// Rewrite bracket groups so their atoms form an explicit alternation
/// chain: `[a b c]` becomes the equivalent of `a|b|c`.
///
/// Brackets do not nest; `[` merely switches the mode on. Pairing is
/// validated later by the postfix compiler.
fn resolve_brackets<T>(tokens: Vec<Token<T>>) -> Result<Vec<Token<T>>, PatternError> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut in_bracket = false;
    let mut first_atom = true;
    for token in tokens {
        match token {
            Token::LBracket => {
                in_bracket = true;
                first_atom = true;
                result.push(token);
            }
            Token::RBracket => {
                in_bracket = false;
                result.push(token);
            }
            atom if atom.is_atom() => {
                if in_bracket && !first_atom {
                    result.push(Token::Branch);
                }
                first_atom = false;
                result.push(atom);
            }
            other => {
                if in_bracket {
                    return Err(PatternError::OperatorInBrackets);
                }
                result.push(other);
            }
        }
    }
    Ok(result)
}
