//! # Bill
//!
//! The running bill for one counter session: an ordered list of line
//! items plus an incrementally maintained total.
//!
//! ## Total Bookkeeping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  add_line     total += line_total                               │
//! │  modify_line  total -= old line_total; total += new line_total  │
//! │  remove_line  total -= line_total                               │
//! │                                                                 │
//! │  INVARIANT: total == sum of line_total over all lines           │
//! │  `recomputed_total()` re-derives the sum so tests can check the │
//! │  bookkeeping instead of trusting it.                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Duplicate Lines
//! `add_line` never merges: adding the same product id twice yields two
//! independent lines, and `modify_line`/`remove_line` operate on the
//! FIRST matching line only. Keeping ids unique on a bill is the
//! caller's job; the terminal does it by checking [`Bill::contains`]
//! before adding.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, Product, ProductId, Receipt};

/// The itemized bill, created once per session and never persisted.
#[derive(Debug, Clone, Default)]
pub struct Bill {
    /// Line items in insertion order (order matters for display).
    lines: Vec<LineItem>,

    /// Running total, maintained incrementally by every mutation.
    total: Money,
}

impl Bill {
    /// Creates an empty bill.
    pub fn new() -> Self {
        Bill {
            lines: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Checks whether any line was built from this product id.
    ///
    /// Linear scan; bills are human-sized.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.lines.iter().any(|line| line.product_id == product_id)
    }

    /// Appends a line for `product` at `quantity`, freezing the product's
    /// name and price into the line.
    ///
    /// The caller resolves `product` from the catalog first (and so has
    /// already handled the not-found case). Calling this twice for the
    /// same id appends a second, independent line; nothing merges.
    pub fn add_line(&mut self, product: &Product, quantity: i64) -> &LineItem {
        let line = LineItem::snapshot(product, quantity);
        self.total += line.line_total;
        self.lines.push(line);
        // Just pushed, so last() is the new line.
        self.lines.last().expect("line was just pushed")
    }

    /// Re-quantifies the FIRST line matching `product.id`.
    ///
    /// The line is replaced outright: name and unit price are re-frozen
    /// from the catalog's current `product`, so a catalog re-price takes
    /// effect here (and only here: other lines stay untouched).
    ///
    /// Returns [`CoreError::LineNotFound`] and leaves the bill unchanged
    /// when no line matches.
    pub fn modify_line(&mut self, product: &Product, new_quantity: i64) -> CoreResult<&LineItem> {
        let index = self
            .lines
            .iter()
            .position(|line| line.product_id == product.id)
            .ok_or(CoreError::LineNotFound(product.id))?;

        let replacement = LineItem::snapshot(product, new_quantity);
        self.total -= self.lines[index].line_total;
        self.total += replacement.line_total;
        self.lines[index] = replacement;

        Ok(&self.lines[index])
    }

    /// Removes the FIRST line matching `product_id`.
    ///
    /// Returns the removed line, or [`CoreError::LineNotFound`] if no
    /// line matches, in which case the bill is untouched.
    pub fn remove_line(&mut self, product_id: ProductId) -> CoreResult<LineItem> {
        let index = self
            .lines
            .iter()
            .position(|line| line.product_id == product_id)
            .ok_or(CoreError::LineNotFound(product_id))?;

        let removed = self.lines.remove(index);
        self.total -= removed.line_total;
        Ok(removed)
    }

    /// The running total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Number of lines on the bill.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the bill has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Re-derives the total by summing the lines.
    ///
    /// Oracle for the bookkeeping invariant: must always equal
    /// [`Bill::total`].
    pub fn recomputed_total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |sum, line| sum + line.line_total)
    }

    /// Freezes the current bill into a [`Receipt`].
    ///
    /// Read-only: the bill keeps its lines and total, and the operator
    /// can continue editing after printing.
    pub fn receipt(&self) -> Receipt {
        Receipt {
            id: Uuid::new_v4(),
            lines: self.lines.clone(),
            total: self.total,
            generated_at: chrono::Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
