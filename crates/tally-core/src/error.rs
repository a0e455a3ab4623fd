//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  tally-core errors (this file)                                  │
//! │  ├── CoreError        - absent ids, bad role choices            │
//! │  └── ValidationError  - opt-in input validation failures        │
//! │                                                                 │
//! │  apps/terminal errors (separate crate)                          │
//! │  └── InputError       - unreadable/unparseable console input    │
//! │                                                                 │
//! │  Every failure is surfaced as a message at the menu boundary;   │
//! │  nothing here ever terminates the process.                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending id/field in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Each variant maps to a user-facing message printed by the terminal;
/// the operation that produced it is a no-op on state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id absent from the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product id has no line on the bill.
    #[error("Item not found on the bill: {0}")]
    LineNotFound(ProductId),

    /// Role selection outside the enumerated set (1 = admin, 2 = operator).
    #[error("{0} is not a role option")]
    InvalidRoleChoice(u32),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced only by the [`crate::validation`] helpers, which callers opt
/// into; the core containers themselves accept values as-is.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ProductNotFound(42).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            CoreError::LineNotFound(7).to_string(),
            "Item not found on the bill: 7"
        );
        assert_eq!(
            CoreError::InvalidRoleChoice(9).to_string(),
            "9 is not a role option"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::TooLong {
            field: "name",
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
