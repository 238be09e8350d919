use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{TokenKind, ONE_OR_TWO_CHAR_LOOKUP, RESERVED_LOOKUP, SINGLE_CHAR_LOOKUP};

pub const COMMENT_START: &str = "//";

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?$").unwrap();
    static ref STRING_PATTERN: Regex = Regex::new("^\".*\"$").unwrap();
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-z_][a-zA-Z_0-9]*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    CommentStart,
    Token(TokenKind),
    NoMatch,
}

/// Classifies a whole candidate. Order matters: the first matcher wins.
pub fn classify(candidate: &str) -> Classification {
    if candidate == COMMENT_START {
        return Classification::CommentStart;
    }

    if NUMBER_PATTERN.is_match(candidate) {
        return Classification::Token(TokenKind::Number);
    }

    if STRING_PATTERN.is_match(candidate) {
        return Classification::Token(TokenKind::String);
    }

    if let Some(kind) = RESERVED_LOOKUP.get(candidate) {
        return Classification::Token(*kind);
    }

    if IDENTIFIER_PATTERN.is_match(candidate) {
        return Classification::Token(TokenKind::Identifier);
    }

    if let Some(kind) = SINGLE_CHAR_LOOKUP.get(candidate) {
        return Classification::Token(*kind);
    }

    match ONE_OR_TWO_CHAR_LOOKUP.get(candidate) {
        Some(kind) => Classification::Token(*kind),
        None => Classification::NoMatch,
    }
}

/// A candidate that has not matched yet but may still grow into a string.
pub fn is_open_string(candidate: &str) -> bool {
    candidate.starts_with('"')
}
