//! # Input Error Type
//!
//! Presentation-level failures: unreadable or unparseable console input.
//!
//! ## Propagation Policy
//! `NotANumber` and `UnknownOption` are handled at the enclosing menu:
//! a message is printed, the sub-operation is abandoned, and the menu is
//! shown again. Only `Eof` (input stream closed) and `Io` escape the
//! session loop, and `Eof` is the clean way a session ends.

use thiserror::Error;

/// Errors produced while reading and parsing console input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Non-numeric input where a number was expected.
    #[error("Retry! Please enter a valid number.")]
    NotANumber,

    /// An integer outside the enumerated menu options.
    #[error("{0} is not one of the menu options")]
    UnknownOption(u32),

    /// The input stream ended.
    #[error("input stream closed")]
    Eof,

    /// Underlying terminal I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
