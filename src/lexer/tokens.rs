use std::fmt::Display;

use crate::Span;

/// The kind of a token, one per rule in the rule table plus the end marker.
///
/// Variants are listed in rule declaration order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Keywords
    And,
    Or,
    Not,

    Eq, // =

    Plus,
    Minus,
    Mult,
    Div,

    Equal,  // = (shadowed by Eq)
    NEqual, // !=
    DEqual, // ==

    LParen,
    RParen,

    Num,
    Str,

    EOF,
}

impl TokenKind {
    /// The name the grammar gives this rule.
    pub fn rule_name(&self) -> &'static str {
        match self {
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Eq => "EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::Equal => "Equal",
            TokenKind::NEqual => "NEqual",
            TokenKind::DEqual => "DEqual",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Num => "NUM",
            TokenKind::Str => "STR",
            TokenKind::EOF => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact text matched, quotes included for strings.
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Num | TokenKind::Str => write!(f, "{} ({})", self.kind, self.lexeme),
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// The value of a `NUM` token.
    ///
    /// `None` for other kinds and for runs the rule accepts but that are not
    /// a number, like `3.14.5` or `...`.
    pub fn number_value(&self) -> Option<f64> {
        if self.kind != TokenKind::Num {
            return None;
        }

        self.lexeme.parse::<f64>().ok()
    }

    /// The text of a `STR` token without its quotes.
    pub fn string_contents(&self) -> Option<&str> {
        if self.kind != TokenKind::Str {
            return None;
        }

        self.lexeme
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
    }
}
