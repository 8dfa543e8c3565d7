//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_LITERAL_RULE!` - Creates a rule matching a fixed string
//! - `MK_PATTERN_RULE!` - Creates a rule matching an anchored regex
//!
//! These macros keep the rule table readable.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Num, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates a rule that matches `$literal` exactly.
///
/// ```ignore
/// MK_LITERAL_RULE!(TokenKind::Plus, "+")
/// ```
#[macro_export]
macro_rules! MK_LITERAL_RULE {
    ($kind:expr, $literal:literal) => {
        Rule {
            kind: $kind,
            pattern: Pattern::Literal($literal),
        }
    };
}

/// Creates a rule from a regular expression.
///
/// The expression is anchored to the start of the remaining input, so
/// `$regex` must not carry its own `^`.
///
/// ```ignore
/// MK_PATTERN_RULE!(TokenKind::Num, "[0-9.]+")
/// ```
#[macro_export]
macro_rules! MK_PATTERN_RULE {
    ($kind:expr, $regex:literal) => {
        Rule {
            kind: $kind,
            pattern: Pattern::Regex(Regex::new(concat!("^(?:", $regex, ")")).unwrap()),
        }
    };
}
