use std::sync::Arc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    rules::{is_unterminated_string, longest_match, whitespace_len},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerState {
    Scanning,
    /// The end marker has been emitted.
    Done,
    /// A lexical error has been returned.
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Append the `EOF` token to the result of [`Lexer::tokenize_all`].
    pub include_end_marker: bool,
}

impl TokenizeOptions {
    pub fn with_end_marker() -> Self {
        TokenizeOptions {
            include_end_marker: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    cursor: Position,
    state: LexerState,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name: Arc<str> = match file {
            Some(file) => Arc::from(file),
            None => Arc::from("shell"),
        };

        Lexer {
            source,
            cursor: Position::start(file_name),
            state: LexerState::Scanning,
        }
    }

    pub fn state(&self) -> LexerState {
        self.state
    }

    pub fn cursor(&self) -> Position {
        self.cursor.clone()
    }

    fn advance_n(&mut self, n: usize) {
        let end = self.cursor.offset + n;

        for ch in self.source[self.cursor.offset..end].chars() {
            if ch == '\n' {
                self.cursor.line += 1;
                self.cursor.column = 1;
            } else {
                self.cursor.column += 1;
            }
        }

        self.cursor.offset = end;
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &str {
        &self.source[self.cursor.offset..]
    }

    fn at_eof(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }

    fn fail(&mut self, error_impl: ErrorImpl) -> Error {
        self.state = LexerState::Failed;
        let error = Error::new(error_impl, self.cursor());
        tracing::debug!(%error, "lexing failed");
        error
    }

    /// Scans the next token, skipping any whitespace before it.
    ///
    /// Returns a token of kind [`TokenKind::EOF`] once the input is exhausted.
    /// Any further call after that, or after an error, yields
    /// [`ErrorImpl::LexerFinished`].
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if self.state != LexerState::Scanning {
            return Err(Error::new(ErrorImpl::LexerFinished, self.cursor()));
        }

        let skipped = whitespace_len(self.remainder());
        self.advance_n(skipped);

        if self.at_eof() {
            self.state = LexerState::Done;
            let end = self.cursor();
            tracing::trace!(offset = end.offset, "reached end of input");
            return Ok(MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        let Some((kind, len)) = longest_match(self.remainder()) else {
            if is_unterminated_string(self.remainder()) {
                return Err(self.fail(ErrorImpl::UnterminatedString));
            }

            // Not at EOF, so there is a character here.
            let character = self.at().unwrap_or_default();
            return Err(self.fail(ErrorImpl::UnrecognizedCharacter { character }));
        };

        let start = self.cursor();
        let lexeme = String::from(&self.remainder()[..len]);
        self.advance_n(len);

        let token = MK_TOKEN!(
            kind,
            lexeme,
            Span {
                start,
                end: self.cursor()
            }
        );
        tracing::trace!(kind = %token.kind, lexeme = %token.lexeme, offset = token.span.start.offset, "token");

        Ok(token)
    }

    /// Runs the lexer to completion.
    ///
    /// Either every token is returned or only the first error; tokens scanned
    /// before an error are discarded.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %self.cursor.file, len = self.source.len()))]
    pub fn tokenize_all(&mut self, options: TokenizeOptions) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token()?;

            if token.is_eof() {
                if options.include_end_marker {
                    tokens.push(token);
                }
                break;
            }

            tokens.push(token);
        }

        tracing::debug!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }
}

/// Yields every token before the end marker, then stops.
///
/// A lexical error is yielded once and ends the iteration.
impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != LexerState::Scanning {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).tokenize_all(TokenizeOptions::with_end_marker())
}
