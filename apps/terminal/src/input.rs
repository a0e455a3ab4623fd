//! # Input Helpers
//!
//! Prompt-and-parse helpers over any `BufRead`.
//!
//! ## Abort, Don't Loop
//! A parse failure here does NOT retry in place: it returns
//! [`InputError::NotANumber`], the session abandons the current
//! sub-operation, prints the retry message, and re-renders the enclosing
//! menu. One bad token costs one menu round, never the session.

use std::io::{BufRead, Write};

use crate::error::InputError;

/// Reads one trimmed line; [`InputError::Eof`] when the stream ends.
pub fn read_line(input: &mut impl BufRead) -> Result<String, InputError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(buf.trim().to_string())
}

/// Reads a `u32` (menu options, product ids, passwords).
pub fn read_u32(input: &mut impl BufRead) -> Result<u32, InputError> {
    read_line(input)?.parse().map_err(|_| InputError::NotANumber)
}

/// Reads an `i64` (quantities, prices in cents).
pub fn read_i64(input: &mut impl BufRead) -> Result<i64, InputError> {
    read_line(input)?.parse().map_err(|_| InputError::NotANumber)
}

/// Prints `prompt` on its own line, then reads a trimmed line.
pub fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<String, InputError> {
    writeln!(output, "{prompt}")?;
    read_line(input)
}

/// Prints `prompt`, then reads a `u32`.
pub fn prompt_u32(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<u32, InputError> {
    writeln!(output, "{prompt}")?;
    read_u32(input)
}

/// Prints `prompt`, then reads an `i64`.
pub fn prompt_i64(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<i64, InputError> {
    writeln!(output, "{prompt}")?;
    read_i64(input)
}

// =============================================================================
// Unit Tests
// =============================================================================
