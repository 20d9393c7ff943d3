//! # Pricing Calculator
//!
//! Derives subtotal, GST, and grand total from a ledger snapshot.
//!
//! ## Rounding Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal  = Σ quantity × unit price        (exact integer paise)      │
//! │  gst       = subtotal × rate                (ONE rounding, at paise)   │
//! │  grand     = subtotal + gst                 (exact integer paise)      │
//! │                                                                         │
//! │  Formatting to "₹x.yy" happens only at the Money display boundary.     │
//! │  Live-order display and checkout snapshotting call the same function   │
//! │  and therefore always agree.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::GstRate;

// =============================================================================
// Order Totals
// =============================================================================

/// The computed totals for a ledger snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of line totals, before tax.
    #[ts(as = "String")]
    pub subtotal: Money,

    /// GST on the subtotal.
    #[ts(as = "String")]
    pub gst_amount: Money,

    /// Subtotal plus GST.
    #[ts(as = "String")]
    pub grand_total: Money,
}

/// Computes totals for a ledger snapshot. Pure function: same ledger and
/// rate always produce the same totals.
pub fn compute_totals(ledger: &Ledger, rate: GstRate) -> OrderTotals {
    let subtotal = ledger
        .lines()
        .iter()
        .fold(Money::zero(), |acc, line| acc + line.line_total());
    let gst_amount = subtotal.calculate_gst(rate);

    OrderTotals {
        subtotal,
        gst_amount,
        grand_total: subtotal + gst_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::engine::apply_additions;
    use crate::types::{MenuItem, OrderRequest};

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            MenuItem {
                id: "burger".to_string(),
                name: "Burger".to_string(),
                price: Money::from_paise(10000), // ₹100.00
                pieces: None,
                description: None,
                category: "Mains".to_string(),
                is_available: true,
            },
            MenuItem {
                id: "coffee".to_string(),
                name: "Filter Coffee".to_string(),
                price: Money::from_paise(4050), // ₹40.50
                pieces: None,
                description: None,
                category: "Beverages".to_string(),
                is_available: true,
            },
        ])
    }

    #[test]
    fn test_empty_ledger_totals_are_zero() {
        let totals = compute_totals(&Ledger::new(), GstRate::from_bps(500));
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.gst_amount, Money::zero());
        assert_eq!(totals.grand_total, Money::zero());
    }

    #[test]
    fn test_two_burgers_at_100() {
        let catalog = test_catalog();
        let ledger = apply_additions(
            &Ledger::new(),
            &[OrderRequest::plain("Burger", 2).unwrap()],
            &catalog,
        )
        .ledger;

        let totals = compute_totals(&ledger, GstRate::from_bps(500));
        assert_eq!(totals.subtotal.to_string(), "₹200.00");
        assert_eq!(totals.gst_amount.to_string(), "₹10.00");
        assert_eq!(totals.grand_total.to_string(), "₹210.00");
    }

    #[test]
    fn test_grand_total_is_exact_sum() {
        let catalog = test_catalog();
        let ledger = apply_additions(
            &Ledger::new(),
            &[
                OrderRequest::plain("Burger", 3).unwrap(),
                OrderRequest::plain("Filter Coffee", 2).unwrap(),
            ],
            &catalog,
        )
        .ledger;

        for bps in [0, 500, 825, 1800] {
            let totals = compute_totals(&ledger, GstRate::from_bps(bps));
            assert_eq!(totals.grand_total, totals.subtotal + totals.gst_amount);
        }
    }

    #[test]
    fn test_totals_identical_across_calls() {
        let catalog = test_catalog();
        let ledger = apply_additions(
            &Ledger::new(),
            &[OrderRequest::plain("Filter Coffee", 7).unwrap()],
            &catalog,
        )
        .ledger;

        let rate = GstRate::from_bps(500);
        assert_eq!(compute_totals(&ledger, rate), compute_totals(&ledger, rate));
    }

    #[test]
    fn test_zero_rate_means_zero_gst() {
        let catalog = test_catalog();
        let ledger = apply_additions(
            &Ledger::new(),
            &[OrderRequest::plain("Burger", 1).unwrap()],
            &catalog,
        )
        .ledger;

        let totals = compute_totals(&ledger, GstRate::zero());
        assert_eq!(totals.gst_amount, Money::zero());
        assert_eq!(totals.grand_total, totals.subtotal);
    }
}
