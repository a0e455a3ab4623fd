//! # Domain Types
//!
//! Core domain types used throughout Tally POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                             │
//! │                                                                 │
//! │  ┌───────────────┐    ┌────────────────┐    ┌───────────────┐  │
//! │  │   Product     │    │   LineItem     │    │   Receipt     │  │
//! │  │ ───────────── │    │ ────────────── │    │ ───────────── │  │
//! │  │ id (u32)      │───►│ product_id     │───►│ id (UUID)     │  │
//! │  │ name          │    │ name (frozen)  │    │ lines         │  │
//! │  │ price         │    │ unit_price (❄) │    │ total         │  │
//! │  └───────────────┘    │ quantity       │    │ generated_at  │  │
//! │                       │ line_total     │    └───────────────┘  │
//! │                       └────────────────┘                       │
//! │                                                                 │
//! │  Product lives in the Catalog; LineItem freezes a Product into  │
//! │  a Bill; Receipt freezes the whole Bill.                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `LineItem` copies the product's name and price at the moment it is
//! added (or last modified). Re-pricing the catalog afterwards does NOT
//! reach back into existing lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// Identifier for a product, chosen by the administrator at entry time.
///
/// Small hand-assigned integers, as shelf tags have always worked: no
/// UUIDs for products, the id IS the business key.
pub type ProductId = u32;

/// A product on the shelf: what the admin maintains, what the operator
/// bills against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Admin-assigned identifier (the key in the catalog).
    pub id: ProductId,

    /// Display name shown in the product table and on receipts.
    pub name: String,

    /// Unit price in minor units.
    pub price: Money,
}

impl Product {
    /// Creates a product record.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced, quantified entry in a bill.
///
/// Name and unit price are frozen from the catalog when the line is added
/// or modified; `line_total` is always `unit_price * quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The catalog id this line was built from.
    pub product_id: ProductId,

    /// Product name at the time of the snapshot (frozen).
    pub name: String,

    /// Unit price at the time of the snapshot (frozen).
    pub unit_price: Money,

    /// Quantity billed.
    pub quantity: i64,

    /// `unit_price * quantity`, precomputed at snapshot time.
    pub line_total: Money,

    /// When this line was added or last modified.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Freezes a product into a bill line at the given quantity.
    pub fn snapshot(product: &Product, quantity: i64) -> Self {
        LineItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            line_total: product.price * quantity,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A point-in-time snapshot of the bill, ready for rendering.
///
/// Generating a receipt is a read: the bill keeps its lines and total and
/// the operator can keep editing afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt identifier (UUID v4, generated per snapshot).
    pub id: Uuid,

    /// All bill lines in insertion order.
    pub lines: Vec<LineItem>,

    /// The bill total at generation time.
    pub total: Money,

    /// When the receipt was generated.
    pub generated_at: DateTime<Utc>,
}

// =============================================================================
// Role
// =============================================================================

/// The two capability sets the role gate can authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Maintains the product catalog.
    Admin,
    /// Builds the bill at the counter.
    Operator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Operator => write!(f, "operator"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
