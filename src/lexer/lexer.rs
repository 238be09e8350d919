use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    split_lines, Position, MK_TOKEN,
};

use super::{
    classify::{classify, is_open_string, Classification},
    config::ScannerOptions,
    tokens::{Literal, Token, TokenKind},
};

/// Cursor over a single physical line. Positions count characters, not bytes.
struct LineCursor<'a> {
    text: &'a str,
    chars: Vec<char>,
    offsets: Vec<usize>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> LineCursor<'a> {
        let (mut offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        offsets.push(text.len());

        LineCursor {
            text,
            chars,
            offsets,
            pos: 0,
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn at(&self) -> char {
        self.chars[self.pos]
    }

    fn remaining(&self) -> usize {
        self.chars.len() - self.pos
    }

    /// The next `n` characters from the cursor, as a slice of the line.
    fn peek_n(&self, n: usize) -> &'a str {
        &self.text[self.offsets[self.pos]..self.offsets[self.pos + n]]
    }

    fn remainder(&self) -> &'a str {
        &self.text[self.offsets[self.pos]..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

/// Outcome of growing a candidate from the cursor.
#[derive(Debug, PartialEq, Eq)]
enum Munch {
    Comment,
    Token { kind: TokenKind, len: usize },
    UnterminatedString,
    Nothing,
}

fn longest_match(cursor: &LineCursor) -> Munch {
    let available = cursor.remaining();
    let mut best: Option<(TokenKind, usize)> = None;
    let mut len = 0;

    while len < available {
        len += 1;
        let candidate = cursor.peek_n(len);

        match classify(candidate) {
            Classification::CommentStart => return Munch::Comment,
            Classification::Token(kind) => best = Some((kind, len)),
            Classification::NoMatch => {
                // `12.` only classifies once the fraction digit is read
                if let Some((TokenKind::Number, _)) = best {
                    if candidate.ends_with('.') && len < available {
                        let extended = classify(cursor.peek_n(len + 1));
                        if let Classification::Token(TokenKind::Number) = extended {
                            len += 1;
                            best = Some((TokenKind::Number, len));
                            continue;
                        }
                    }
                }

                if best.is_some() || !is_open_string(candidate) {
                    break;
                }
            }
        }
    }

    match best {
        Some((kind, len)) => Munch::Token { kind, len },
        None if is_open_string(cursor.peek_n(1)) => Munch::UnterminatedString,
        None => Munch::Nothing,
    }
}

#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    file: Rc<String>,
    options: ScannerOptions,
}

impl Scanner {
    pub fn new(source: String, file: Option<String>) -> Scanner {
        Scanner::with_options(source, file, ScannerOptions::default())
    }

    pub fn with_options(
        source: String,
        file: Option<String>,
        options: ScannerOptions,
    ) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            source,
            file: file_name,
            options,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scans according to the configured mode. Strict mode fails with the first diagnostic.
    pub fn scan(&self) -> Result<Vec<Token>, Error> {
        let (tokens, errors) = self.scan_all();

        match errors.into_iter().next() {
            Some(error) if self.options.is_strict() => Err(error),
            _ => Ok(tokens),
        }
    }

    /// Scans every line, dropping what cannot be classified and reporting it alongside the tokens.
    pub fn scan_all(&self) -> (Vec<Token>, Vec<Error>) {
        let mut tokens = vec![];
        let mut errors = vec![];
        let mut line_count = 0;

        for (line, text) in split_lines(&self.source).into_iter().enumerate() {
            let ended_in_comment = self.scan_line(text, line, &mut tokens, &mut errors);
            if ended_in_comment {
                trace!(line, "comment runs to end of line");
            }
            line_count = line + 1;
        }

        tokens.push(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Literal::Text(String::new()),
            line_count,
            0
        ));

        debug!(
            file = %self.file,
            lines = line_count,
            tokens = tokens.len(),
            dropped = errors.len(),
            "scanned source"
        );

        (tokens, errors)
    }

    /// Returns true when the rest of the line was a comment.
    fn scan_line(
        &self,
        text: &str,
        line: usize,
        tokens: &mut Vec<Token>,
        errors: &mut Vec<Error>,
    ) -> bool {
        let mut cursor = LineCursor::new(text);

        while !cursor.at_eof() {
            if cursor.at().is_whitespace() {
                cursor.advance_n(1);
                continue;
            }

            let column = cursor.pos;

            match longest_match(&cursor) {
                Munch::Comment => {
                    if self.options.keep_comments {
                        let lexeme = cursor.remainder().to_string();
                        tokens.push(MK_TOKEN!(
                            TokenKind::Comment,
                            lexeme.clone(),
                            Literal::Text(lexeme),
                            line,
                            column
                        ));
                    }
                    return true;
                }
                Munch::Token { kind, len } => {
                    let lexeme = cursor.peek_n(len);
                    tokens.push(MK_TOKEN!(
                        kind,
                        lexeme.to_string(),
                        Literal::decode(kind, lexeme),
                        line,
                        column
                    ));
                    cursor.advance_n(len);
                }
                Munch::UnterminatedString => {
                    let token = cursor.remainder().to_string();
                    let error = ErrorImpl::UnterminatedString { token };
                    errors.push(self.reject(error, line, column));
                    cursor.advance_n(1);
                }
                Munch::Nothing => {
                    let token = cursor.at().to_string();
                    let error = ErrorImpl::UnrecognisedToken { token };
                    errors.push(self.reject(error, line, column));
                    cursor.advance_n(1);
                }
            }
        }

        false
    }

    fn reject(&self, error: ErrorImpl, line: usize, column: usize) -> Error {
        debug!(file = %self.file, line, column, "dropping input: {}", error);

        Error::new(
            error,
            Position {
                line,
                column,
                file: Rc::clone(&self.file),
            },
        )
    }
}

/// Lenient scan: never fails, unrecognised characters are dropped.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Scanner::new(source, file).scan_all().0
}

pub fn tokenize_strict(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Scanner::with_options(source, file, ScannerOptions::strict()).scan()
}

pub fn tokenize_with(
    source: String,
    file: Option<String>,
    options: ScannerOptions,
) -> Result<Vec<Token>, Error> {
    Scanner::with_options(source, file, options).scan()
}
