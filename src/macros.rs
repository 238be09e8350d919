//! Utility macros for the scanner.
//!
//! This module defines helper macros used throughout the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_LOOKUP!` - Builds an exact-match lookup table from lexemes to token kinds
//!
//! These macros reduce boilerplate in the token tables and the scanner loop.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$literal` - The decoded literal value
/// * `$line` - 0-based line index
/// * `$column` - 0-based column of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Literal::Number(42.0), 0, 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
            column: $column,
        }
    };
}

/// Builds a `HashMap<&'static str, TokenKind>` from `lexeme => kind` pairs.
///
/// # Example
///
/// ```ignore
/// let table = MK_LOOKUP! {
///     "(" => TokenKind::LeftParen,
///     ")" => TokenKind::RightParen,
/// };
/// ```
#[macro_export]
macro_rules! MK_LOOKUP {
    ($($lexeme:literal => $kind:expr),* $(,)?) => {{
        let mut map = ::std::collections::HashMap::new();
        $(map.insert($lexeme, $kind);)*
        map
    }};
}
