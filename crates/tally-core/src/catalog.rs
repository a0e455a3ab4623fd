//! # Catalog
//!
//! The product id → (name, price) mapping the admin maintains.
//!
//! ## Ownership
//! Exactly one `Catalog` exists per session, owned by the caller and
//! passed by reference to both the admin path (mutations) and the
//! operator path (lookups). No statics, no ambient state.
//!
//! ## Iteration Order
//! Backed by a `HashMap`, so iteration order carries no meaning. Callers
//! that render the product table must not rely on it, and tests assert
//! set equality only.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};

/// The product catalog.
///
/// Invariant: at most one [`Product`] per id (enforced by the map).
/// Lookups for absent ids return `None` or a typed error, never a default.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: HashMap::new(),
        }
    }

    /// Inserts or overwrites the product at `id`.
    ///
    /// Returns the previous product when this was an overwrite, so the
    /// caller can tell "added" from "re-priced".
    ///
    /// Price sign is NOT constrained here: zero and negative prices are
    /// stored as-is. Callers that want guard rails opt into
    /// [`crate::validation`] first, as the terminal does.
    pub fn upsert(&mut self, id: ProductId, name: impl Into<String>, price: Money) -> Option<Product> {
        self.products.insert(id, Product::new(id, name, price))
    }

    /// Checks whether a product with this id exists.
    pub fn exists(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Removes the product at `id`.
    ///
    /// Returns the removed product, or [`CoreError::ProductNotFound`] if
    /// absent, in which case the catalog is untouched.
    pub fn remove(&mut self, id: ProductId) -> CoreResult<Product> {
        self.products
            .remove(&id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// Removes all products unconditionally.
    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Iterates over all products (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_upsert_inserts_and_overwrites() {
        let mut catalog = Catalog::new();

        let previous = catalog.upsert(1, "Pen", Money::from_cents(10));
        assert!(previous.is_none());
        assert_eq!(catalog.len(), 1);

        // Same id overwrites rather than duplicating.
        let previous = catalog.upsert(1, "Pen", Money::from_cents(20));
        assert_eq!(previous.unwrap().price, Money::from_cents(10));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().price, Money::from_cents(20));
    }

    #[test]
    fn test_get_absent_is_none_not_default() {
        let catalog = Catalog::new();
        assert!(catalog.get(99).is_none());
        assert!(!catalog.exists(99));
    }

    #[test]
    fn test_remove_absent_reports_not_found() {
        let mut catalog = Catalog::new();
        catalog.upsert(1, "Pen", Money::from_cents(10));

        let err = catalog.remove(2).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(2)));
        // The failed remove was a no-op.
        assert_eq!(catalog.len(), 1);

        let removed = catalog.remove(1).unwrap();
        assert_eq!(removed.name, "Pen");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_clear_is_unconditional() {
        let mut catalog = Catalog::new();
        catalog.upsert(1, "Pen", Money::from_cents(10));
        catalog.upsert(2, "Pad", Money::from_cents(55));

        catalog.clear();
        assert!(catalog.is_empty());

        // Clearing an already-empty catalog is fine too.
        catalog.clear();
        assert!(catalog.is_empty());
    }

    /// `exists` reflects exactly the net effect of
    /// upsert/remove/clear applied in order.
    #[test]
    fn test_net_effect_of_operation_sequence() {
        let mut catalog = Catalog::new();

        catalog.upsert(1, "Pen", Money::from_cents(10));
        catalog.upsert(2, "Pad", Money::from_cents(55));
        catalog.upsert(3, "Ink", Money::from_cents(99));
        let _ = catalog.remove(2);
        catalog.upsert(4, "Clip", Money::from_cents(5));
        let _ = catalog.remove(1);
        catalog.upsert(1, "Pen v2", Money::from_cents(12));

        for id in [1, 3, 4] {
            assert!(catalog.exists(id), "id {id} should exist");
        }
        assert!(!catalog.exists(2));

        catalog.clear();
        for id in 1..=4 {
            assert!(!catalog.exists(id));
        }
    }

    /// Iteration order is meaningless; compare as a set.
    #[test]
    fn test_iteration_is_set_equal() {
        let mut catalog = Catalog::new();
        catalog.upsert(1, "Pen", Money::from_cents(10));
        catalog.upsert(2, "Pad", Money::from_cents(55));
        catalog.upsert(3, "Ink", Money::from_cents(99));

        let ids: HashSet<ProductId> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, HashSet::from([1, 2, 3]));
    }
}
