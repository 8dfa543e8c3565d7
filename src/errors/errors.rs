use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::LexerFinished => "LexerFinished",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognizedCharacter { character: '"' } => ErrorTip::Suggestion(
                String::from("Strings must start with a letter or underscore"),
            ),
            ErrorImpl::UnrecognizedCharacter { character: '!' } => {
                ErrorTip::Suggestion(String::from("Did you mean `!=`? Negation is written `not`"))
            }
            ErrorImpl::UnrecognizedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "Strings may only contain letters, digits and underscores, and must end with `\"`",
            )),
            ErrorImpl::LexerFinished => ErrorTip::Suggestion(String::from(
                "The lexer has already produced its last token",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognized character: {character:?}")]
    UnrecognizedCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("no tokens left: the lexer already finished")]
    LexerFinished,
}
