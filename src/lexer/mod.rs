//! Lexical analysis module.
//!
//! This module contains the scanner that converts Lox source text into a
//! stream of tokens for a parser. It handles:
//!
//! - Line-by-line maximal-munch tokenization
//! - Recognition of keywords, identifiers, numbers, strings and operators
//! - Comments, which run to the end of their line
//! - Line and column tracking for diagnostics

pub mod classify;
pub mod config;
pub mod lexer;
pub mod tokens;
