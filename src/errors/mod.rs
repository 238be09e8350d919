//! Error types and error handling for the scanner.
//!
//! This module defines the diagnostics the scanner can produce. It includes:
//!
//! - Error structures with source position information
//! - Variants for unrecognised characters and unterminated strings
//! - Error names and tips used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
