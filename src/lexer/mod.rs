//! Lexical analysis for the expression language.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Matching the ordered rule table with longest-match-wins semantics
//! - Recognition of keywords, operators, numbers and strings
//! - Token position tracking (byte offset, line, column) for error reporting
//! - Whitespace skipping and the end-of-input marker

pub mod lexer;
pub mod rules;
pub mod tokens;
