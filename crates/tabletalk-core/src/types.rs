//! # Domain Types
//!
//! Core domain types used throughout TableTalk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │  OrderRequest   │   │    GstRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  item_name      │   │  bps (u32)      │       │
//! │  │  name           │   │  quantity       │   │  500 = 5%       │       │
//! │  │  price: Money   │   │  customization? │   └─────────────────┘       │
//! │  │  pieces?        │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  MenuItem is the immutable catalog entry; OrderRequest is the          │
//! │  structured intent produced upstream by the ordering assistant.        │
//! │  OrderLine / Ledger / Bill live in their own modules.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_customization, validate_item_name, validate_quantity};

// =============================================================================
// GST Rate
// =============================================================================

/// GST rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (restaurant GST)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstRate(u32);

impl GstRate {
    /// Creates a GST rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        GstRate(bps)
    }

    /// Creates a GST rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        GstRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero GST rate.
    #[inline]
    pub const fn zero() -> Self {
        GstRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for GstRate {
    fn default() -> Self {
        GstRate::from_bps(crate::DEFAULT_GST_RATE_BPS)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// An item on the restaurant menu.
///
/// Loaded once per session from the catalog source and never mutated by the
/// core. Name lookup is case-insensitive and trimmed (see [`crate::catalog`]).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier, stable across sessions.
    pub id: String,

    /// Display name shown to the guest and on the bill.
    pub name: String,

    /// Price per unit.
    #[ts(as = "String")]
    pub price: Money,

    /// Piece count for items served in countable units
    /// (e.g. "Momos (6pcs)"). None for portion-based dishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pieces: Option<u32>,

    /// Optional description for the menu page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Menu section ("Starters", "Mains", "Beverages", ...).
    pub category: String,

    /// Whether the kitchen is currently serving this item.
    pub is_available: bool,
}

impl MenuItem {
    /// The guest-facing display name: name plus piece count when present.
    ///
    /// ## Example
    /// "Veg Momos (6pcs)", "Filter Coffee"
    pub fn display_name(&self) -> String {
        display_with_pieces(&self.name, self.pieces)
    }
}

/// Formats a name with its piece-count suffix, pluralized when > 1.
pub(crate) fn display_with_pieces(name: &str, pieces: Option<u32>) -> String {
    match pieces {
        Some(1) => format!("{} (1pc)", name),
        Some(n) => format!("{} ({}pcs)", name, n),
        None => name.to_string(),
    }
}

// =============================================================================
// Order Request
// =============================================================================

/// A structured add- or remove-request produced by the ordering assistant.
///
/// The assistant does the natural-language work; by the time a request
/// reaches the reconciliation engine it is this validated triple. The
/// constructor is the trust boundary: a request that exists always has a
/// positive quantity and a non-empty item name, and `customization` is
/// `None` rather than `Some("")` when the guest asked for nothing special.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Free-form item name as the guest said it ("paneer tikka").
    pub item_name: String,

    /// How many units to add or remove. Always >= 1.
    pub quantity: i64,

    /// Customization notes ("less spicy"). None when plain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<String>,
}

impl OrderRequest {
    /// Creates a validated request.
    ///
    /// ## Validation
    /// - `item_name` must be non-empty after trimming
    /// - `quantity` must be between 1 and the per-line maximum
    /// - `customization` is trimmed; empty notes become `None`
    pub fn new(
        item_name: impl Into<String>,
        quantity: i64,
        customization: Option<String>,
    ) -> Result<Self, ValidationError> {
        let item_name = item_name.into();
        validate_item_name(&item_name)?;
        validate_quantity(quantity)?;

        let customization = match customization {
            Some(notes) => {
                validate_customization(&notes)?;
                let trimmed = notes.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            None => None,
        };

        Ok(OrderRequest {
            item_name: item_name.trim().to_string(),
            quantity,
            customization,
        })
    }

    /// A plain request with no customization.
    pub fn plain(item_name: impl Into<String>, quantity: i64) -> Result<Self, ValidationError> {
        OrderRequest::new(item_name, quantity, None)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_rate_from_bps() {
        let rate = GstRate::from_bps(500);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_gst_rate_from_percentage() {
        assert_eq!(GstRate::from_percentage(5.0).bps(), 500);
        assert_eq!(GstRate::from_percentage(18.0).bps(), 1800);
    }

    #[test]
    fn test_gst_rate_default_is_restaurant_rate() {
        assert_eq!(GstRate::default().bps(), crate::DEFAULT_GST_RATE_BPS);
    }

    #[test]
    fn test_display_name_pluralizes_pieces() {
        let mut item = MenuItem {
            id: "momo-veg".to_string(),
            name: "Veg Momos".to_string(),
            price: Money::from_paise(12000),
            pieces: Some(6),
            description: None,
            category: "Starters".to_string(),
            is_available: true,
        };
        assert_eq!(item.display_name(), "Veg Momos (6pcs)");

        item.pieces = Some(1);
        assert_eq!(item.display_name(), "Veg Momos (1pc)");

        item.pieces = None;
        assert_eq!(item.display_name(), "Veg Momos");
    }

    #[test]
    fn test_order_request_trims_and_normalizes() {
        let req = OrderRequest::new("  Paneer Tikka  ", 2, Some("  ".to_string())).unwrap();
        assert_eq!(req.item_name, "Paneer Tikka");
        assert_eq!(req.quantity, 2);
        assert_eq!(req.customization, None);

        let req = OrderRequest::new("Paneer Tikka", 1, Some(" extra spicy ".to_string())).unwrap();
        assert_eq!(req.customization.as_deref(), Some("extra spicy"));
    }

    #[test]
    fn test_order_request_rejects_bad_input() {
        assert!(OrderRequest::plain("", 1).is_err());
        assert!(OrderRequest::plain("   ", 1).is_err());
        assert!(OrderRequest::plain("Burger", 0).is_err());
        assert!(OrderRequest::plain("Burger", -2).is_err());
        assert!(OrderRequest::plain("Burger", 1000).is_err());
    }
}
