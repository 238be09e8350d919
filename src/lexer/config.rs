//! Scanner configuration.
//!
//! `ScannerOptions` controls how the scanner treats input it cannot
//! classify and whether comments reach the token stream. The defaults
//! reproduce the lenient behaviour callers rely on: unrecognised characters
//! are dropped and every comment becomes a COMMENT token.
//!
//! ```
//! # use lox_scanner::lexer::config::*;
//! let opts = ScannerOptions {
//!     mode: ScanMode::Strict,
//!     ..Default::default()
//! };
//! assert!(opts.keep_comments);
//! ```

/// What happens to characters that start no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Drop the character and continue with the next one
    #[default]
    Lenient,
    /// Fail on the first unrecognised character or unterminated string
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerOptions {
    pub mode: ScanMode,
    /// Emit COMMENT tokens. When false, comments are consumed silently.
    pub keep_comments: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        ScannerOptions {
            mode: ScanMode::Lenient,
            keep_comments: true,
        }
    }
}

impl ScannerOptions {
    pub fn strict() -> Self {
        ScannerOptions {
            mode: ScanMode::Strict,
            ..Default::default()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ScanMode::Strict
    }
}
