use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::MK_LOOKUP;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = MK_LOOKUP! {
        "and" => TokenKind::And,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "fun" => TokenKind::Fun,
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
    };

    pub static ref SINGLE_CHAR_LOOKUP: HashMap<&'static str, TokenKind> = MK_LOOKUP! {
        "(" => TokenKind::LeftParen,
        ")" => TokenKind::RightParen,
        "{" => TokenKind::LeftBrace,
        "}" => TokenKind::RightBrace,
        "," => TokenKind::Comma,
        "." => TokenKind::Dot,
        "-" => TokenKind::Minus,
        "+" => TokenKind::Plus,
        ";" => TokenKind::Semicolon,
        "/" => TokenKind::Slash,
        "*" => TokenKind::Star,
    };

    pub static ref ONE_OR_TWO_CHAR_LOOKUP: HashMap<&'static str, TokenKind> = MK_LOOKUP! {
        "!=" => TokenKind::BangEqual,
        "!" => TokenKind::Bang,
        "==" => TokenKind::EqualEqual,
        "=" => TokenKind::Equal,
        ">=" => TokenKind::GreaterEqual,
        ">" => TokenKind::Greater,
        "<=" => TokenKind::LessEqual,
        "<" => TokenKind::Less,
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    Comment,

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    Bang,       // !
    BangEqual,  // !=
    Equal,      // =
    EqualEqual, // ==
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Reserved
    And,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    True,
    Var,
    While,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded value carried next to the lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Text(String),
}

impl Literal {
    /// Numbers are parsed, strings lose their quotes, everything else keeps its lexeme.
    pub fn decode(kind: TokenKind, lexeme: &str) -> Literal {
        match kind {
            TokenKind::Number => lexeme
                .parse::<f64>()
                .map(Literal::Number)
                .unwrap_or_else(|_| Literal::Text(lexeme.to_string())),
            TokenKind::String if lexeme.len() >= 2 => {
                Literal::Text(lexeme[1..lexeme.len() - 1].to_string())
            }
            _ => Literal::Text(lexeme.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(value) => Some(*value),
            Literal::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Number(_) => None,
            Literal::Text(text) => Some(text),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{:?}", value),
            Literal::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Literal,
    pub line: usize,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} @{}:{}",
            self.kind, self.lexeme, self.literal, self.line, self.column
        )
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Literal-bearing tokens, the ones whose literal differs in type or content from the lexeme.
    pub fn has_literal(&self) -> bool {
        self.is_one_of_many(&[TokenKind::String, TokenKind::Number])
    }

    pub fn is_trivia(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Comment])
    }
}
