//! # Validation Module
//!
//! Opt-in input validation for callers that want guard rails.
//!
//! ## Why Opt-In?
//! The core containers accept zero and negative prices and quantities
//! without a word: [`crate::Catalog::upsert`] and
//! [`crate::Bill::add_line`] take what they are given. The terminal app
//! runs these checks BEFORE calling the core, so the shipped console
//! never produces a nonsense line, while an embedder who wants the
//! unguarded behavior simply skips them.

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// Returns the trimmed name.
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a bill quantity: must be positive.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }
    Ok(())
}

/// Validates a catalog price: must be non-negative (zero is a legitimate
/// free item).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price",
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
