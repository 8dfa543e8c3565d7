//! The rule table driving the lexer.
//!
//! Rules are kept in declaration order. When two rules match the same number
//! of characters the one declared first wins, which is why `=` always lexes
//! as [`TokenKind::Eq`] and never as [`TokenKind::Equal`].

use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_LITERAL_RULE, MK_PATTERN_RULE};

use super::tokens::TokenKind;

#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(&'static str),
    /// Anchored with `^`, so a match always starts at the cursor.
    Regex(Regex),
}

impl Pattern {
    /// Length in bytes of the match at the start of `remainder`, if any.
    pub fn match_len(&self, remainder: &str) -> Option<usize> {
        match self {
            Pattern::Literal(literal) => remainder.starts_with(*literal).then_some(literal.len()),
            Pattern::Regex(regex) => regex
                .find(remainder)
                .map(|m| m.end())
                .filter(|len| *len > 0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: Pattern,
}

lazy_static! {
    pub static ref RULES: Vec<Rule> = vec![
        MK_LITERAL_RULE!(TokenKind::And, "and"),
        MK_LITERAL_RULE!(TokenKind::Or, "or"),
        MK_LITERAL_RULE!(TokenKind::Not, "not"),
        MK_LITERAL_RULE!(TokenKind::Eq, "="),
        MK_LITERAL_RULE!(TokenKind::Plus, "+"),
        MK_LITERAL_RULE!(TokenKind::Minus, "-"),
        MK_LITERAL_RULE!(TokenKind::Mult, "*"),
        MK_LITERAL_RULE!(TokenKind::Div, "/"),
        MK_LITERAL_RULE!(TokenKind::Equal, "="),
        MK_LITERAL_RULE!(TokenKind::NEqual, "!="),
        MK_LITERAL_RULE!(TokenKind::DEqual, "=="),
        MK_LITERAL_RULE!(TokenKind::LParen, "("),
        MK_LITERAL_RULE!(TokenKind::RParen, ")"),
        MK_PATTERN_RULE!(TokenKind::Num, "[0-9.]+"),
        MK_PATTERN_RULE!(TokenKind::Str, "\"[A-Za-z_][A-Za-z0-9_]*\""),
    ];

    static ref WHITESPACE: Regex = Regex::new("^[ \t\n]+").unwrap();

    // A quote that opens a string which then fails to close.
    static ref STRING_OPENING: Regex = Regex::new("^\"(?:[A-Za-z_]|$)").unwrap();
}

/// Picks the rule with the longest match at the start of `remainder`.
///
/// Ties go to the rule declared first. Returns the winning kind and the match
/// length in bytes.
pub fn longest_match(remainder: &str) -> Option<(TokenKind, usize)> {
    let mut best: Option<(TokenKind, usize)> = None;

    for rule in RULES.iter() {
        if let Some(len) = rule.pattern.match_len(remainder) {
            match best {
                Some((_, best_len)) if best_len >= len => {}
                _ => best = Some((rule.kind, len)),
            }
        }
    }

    best
}

/// Length of the whitespace run at the start of `remainder`.
pub fn whitespace_len(remainder: &str) -> usize {
    WHITESPACE.find(remainder).map_or(0, |m| m.end())
}

pub fn is_unterminated_string(remainder: &str) -> bool {
    STRING_OPENING.is_match(remainder)
}
