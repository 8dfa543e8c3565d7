//! Unit tests for error handling.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

fn position(offset: usize, line: usize, column: usize) -> Position {
    Position {
        offset,
        line,
        column,
        file: Arc::from("test.expr"),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '#' },
        position(10, 1, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognizedCharacter");
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognizedCharacter { character: '#' }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedString, position(42, 3, 5));

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 5);
    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '#' },
        position(4, 2, 1),
    );

    assert_eq!(
        error.to_string(),
        "unrecognized character: '#' at test.expr:2:1"
    );
}

#[test]
fn test_lexer_finished_error() {
    let error = Error::new(ErrorImpl::LexerFinished, position(0, 1, 1));

    assert_eq!(error.get_error_name(), "LexerFinished");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '@' },
        position(0, 1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_for_bang() {
    let error = Error::new(
        ErrorImpl::UnrecognizedCharacter { character: '!' },
        position(0, 1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("!=")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
