//! # Catalog Module
//!
//! The immutable per-session menu catalog with case-insensitive name lookup.
//!
//! ## Lookup Normalization
//! Guests say "paneer tikka", the menu says "Paneer Tikka", and the
//! assistant forwards whatever it heard. The catalog resolves names through
//! [`normalize`] (trim + lowercase), and the same function decides
//! customization-note equality in the ledger, so there is exactly one
//! definition of "the same text" in the system.

use std::collections::HashMap;

use crate::types::MenuItem;

/// Normalizes free-form text for identity comparison: trim + lowercase.
///
/// Shared by catalog name lookup and order-line customization equality.
///
/// ## Example
/// ```rust
/// use tabletalk_core::catalog::normalize;
///
/// assert_eq!(normalize("  Paneer Tikka "), "paneer tikka");
/// assert_eq!(normalize("NO ONION"), normalize("no onion"));
/// ```
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// =============================================================================
// Catalog
// =============================================================================

/// The menu catalog for a session.
///
/// ## Invariants
/// - Immutable once built; the session never mutates menu data
/// - The lookup index is keyed by normalized name; on duplicate normalized
///   names the first item wins
/// - Lookup only resolves items the kitchen is currently serving
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from menu items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut by_name = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            by_name.entry(normalize(&item.name)).or_insert(idx);
        }
        Catalog { items, by_name }
    }

    /// Resolves a free-form item name to a menu item.
    ///
    /// Matching is exact after normalization; unavailable items resolve to
    /// `None` so the guest sees the same "not on the menu" outcome for an
    /// unknown dish and an out-of-stock one.
    pub fn resolve(&self, name: &str) -> Option<&MenuItem> {
        self.by_name
            .get(&normalize(name))
            .map(|&idx| &self.items[idx])
            .filter(|item| item.is_available)
    }

    /// All menu items, in menu order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items in the catalog (available or not).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn menu_item(id: &str, name: &str, available: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_paise(10000),
            pieces: None,
            description: None,
            category: "Mains".to_string(),
            is_available: available,
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Paneer Tikka "), "paneer tikka");
        assert_eq!(normalize("BURGER"), "burger");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_resolve_case_insensitive_and_trimmed() {
        let catalog = Catalog::new(vec![menu_item("pt-1", "Paneer Tikka", true)]);

        assert!(catalog.resolve("Paneer Tikka").is_some());
        assert!(catalog.resolve("paneer tikka").is_some());
        assert!(catalog.resolve("  PANEER TIKKA  ").is_some());
        assert!(catalog.resolve("Paneer").is_none());
    }

    #[test]
    fn test_resolve_skips_unavailable() {
        let catalog = Catalog::new(vec![menu_item("pt-1", "Paneer Tikka", false)]);
        assert!(catalog.resolve("Paneer Tikka").is_none());
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let catalog = Catalog::new(vec![
            menu_item("first", "Dal Fry", true),
            menu_item("second", "dal fry", true),
        ]);
        assert_eq!(catalog.resolve("DAL FRY").unwrap().id, "first");
    }
}
