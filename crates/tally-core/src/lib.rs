//! # tally-core: Pure Business Logic for Tally POS
//!
//! The heart of Tally POS: catalog bookkeeping, bill math, and the role
//! gate, as pure in-memory state machines with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Tally POS Architecture                      │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │                apps/terminal (menu loop)                  │ │
//! │  │   role menu ──► admin menu / operator menu ──► renderer   │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │ typed calls                    │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │              ★ tally-core (THIS CRATE) ★                  │ │
//! │  │                                                           │ │
//! │  │  ┌─────────┐  ┌─────────┐  ┌──────┐  ┌──────┐  ┌──────┐  │ │
//! │  │  │ catalog │  │  bill   │  │ auth │  │money │  │types │  │ │
//! │  │  │ Catalog │  │  Bill   │  │ Gate │  │Money │  │Line..│  │ │
//! │  │  └─────────┘  └─────────┘  └──────┘  └──────┘  └──────┘  │ │
//! │  │                                                           │ │
//! │  │  NO I/O • NO GLOBALS • PURE STATE MACHINES                │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, Receipt, Role)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The product id → (name, price) mapping
//! - [`bill`] - Ordered line items plus an incrementally maintained total
//! - [`auth`] - The two-password role gate state machine
//! - [`validation`] - Opt-in input validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure state**: no hidden statics; one [`Catalog`] instance is handed
//!    to both the admin and the operator paths by the caller
//! 2. **Integer money**: all monetary values are minor units (i64 cents)
//! 3. **Explicit errors**: absent ids surface as typed errors or `None`,
//!    never defaults
//! 4. **Snapshots, not links**: a bill line freezes the catalog's name and
//!    price at add/modify time; later catalog edits leave it untouched
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Bill, Catalog, Money};
//!
//! let mut catalog = Catalog::new();
//! catalog.upsert(1, "Pen", Money::from_cents(10));
//!
//! let mut bill = Bill::new();
//! let pen = catalog.get(1).expect("just inserted");
//! bill.add_line(pen, 3);
//!
//! assert_eq!(bill.total(), Money::from_cents(30));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod bill;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Bill` instead of
// `use tally_core::bill::Bill`

pub use auth::{LoginOutcome, RoleGate};
pub use bill::Bill;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{LineItem, Product, ProductId, Receipt, Role};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name accepted by [`validation`].
///
/// Long enough for any real shelf label; short enough that a paste
/// accident does not wreck the product table rendering.
pub const MAX_NAME_LEN: usize = 200;
