//! Error types for the lexer.
//!
//! Every lexical failure is an [`errors::Error`]: the kind of failure plus
//! the position where scanning stopped, which is enough for a caller to
//! point at the offending character.

pub mod errors;

#[cfg(test)]
mod tests;
