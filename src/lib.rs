#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Location of a character. `line` and `column` are 0-based; `Display` shows them 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            line: 0,
            column: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.column + 1)
    }
}

/// Splits source into physical lines. A trailing `\r` is not part of its line,
/// trailing blank lines are not lines, and empty source is a single empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return vec![""];
    }

    let mut lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

pub fn get_line_at_position<'a>(content: &'a str, position: &Position) -> Option<&'a str> {
    split_lines(content).get(position.line).copied()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    fn position(line: usize, column: usize, file: &str) -> Position {
        Position {
            line,
            column,
            file: Rc::new(String::from(file)),
        }
    }

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nsecond\r\nthird line\n";
        let line_at = |line| super::get_line_at_position(content, &position(line, 0, "test.lox"));

        assert_eq!(line_at(0), Some("Hello, world!"));
        assert_eq!(line_at(1), Some("second"));
        assert_eq!(line_at(2), Some("third line"));
        assert_eq!(line_at(3), None);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(super::split_lines(""), vec![""]);
        assert_eq!(super::split_lines("a"), vec!["a"]);
        assert_eq!(super::split_lines("a\n"), vec!["a"]);
        assert_eq!(super::split_lines("a\n\n\n"), vec!["a"]);
        assert_eq!(super::split_lines("\n\na"), vec!["", "", "a"]);
        assert_eq!(super::split_lines("a\r\n\r\nb\r\n"), vec!["a", "", "b"]);
        assert!(super::split_lines("\n").is_empty());
        assert_eq!(super::split_lines(" \n"), vec![" "]);
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(position(4, 0, "main.lox").to_string(), "main.lox:5:1");
    }

    #[test]
    fn test_format_error() {
        let source = "var a = 1;\n    var b = @;\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: String::from("@"),
            },
            position(1, 12, "final.lox"),
        );

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedToken (No token can start with `@`)");
        assert_eq!(lines[1], "-> final.lox");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | var b = @;");
        assert_eq!(lines[4], "  | --------^");
    }
}

pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> final.lox
           |
        20 | var a = #;
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position).unwrap_or("");

    let line_string = (position.line + 1).to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let removed = string.chars().take_while(|c| c.is_whitespace()).count();
    (string.trim_start(), removed)
}
