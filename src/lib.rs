#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A location in the source text.
///
/// `offset` is a byte offset into the input, `line` and `column` are 1-based
/// and the column is counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub file: Arc<str>,
}

impl Position {
    pub fn start(file: Arc<str>) -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            file,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the full text of that line (including its
/// trailing newline, if any) and the byte offset of `position` within the line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}
