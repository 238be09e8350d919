//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(line: usize, column: usize) -> Position {
    Position {
        line,
        column,
        file: Rc::new("test.lox".to_string()),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(0, 10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnterminatedString {
            token: "\"abc".to_string(),
        },
        position(3, 42),
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        position(1, 4),
    );

    assert_eq!(error.to_string(), "unrecognised token: \"#\" at test.lox:2:5");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(0, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains('@')),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_null_position() {
    let null = Position::null();

    assert_eq!(null.line, 0);
    assert_eq!(null.file.as_str(), "<null>");
}
