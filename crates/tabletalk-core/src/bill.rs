//! # Bill Module
//!
//! The immutable checkout snapshot of a session's order.
//!
//! ## Snapshot Pattern
//! A `Bill` is created exactly once, at checkout, from the ledger as it
//! stands. It is never re-derived from a later ledger: if the guest keeps
//! ordering after a checkout attempt, that is a new bill. Totals are frozen
//! at creation using the same pricing function the live display uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::ledger::{Ledger, OrderLine};
use crate::money::Money;
use crate::pricing::{compute_totals, OrderTotals};
use crate::types::GstRate;

// =============================================================================
// Bill Status
// =============================================================================

/// The lifecycle status of a bill in the kitchen-facing store.
///
/// This system only ever writes `Pending`; the kitchen dashboard owns the
/// later transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    /// Submitted by the guest, awaiting the kitchen.
    Pending,
    /// Accepted and being prepared.
    Preparing,
    /// Served to the table.
    Served,
}

impl Default for BillStatus {
    fn default() -> Self {
        BillStatus::Pending
    }
}

// =============================================================================
// Bill
// =============================================================================

/// An immutable bill snapshot, the unit of submission to the `bills`
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Document id (UUID v4, generated at snapshot time).
    pub id: String,

    /// The guest's table.
    pub table_number: u32,

    /// The ordered lines, frozen from the ledger.
    pub items: Vec<OrderLine>,

    /// Sum of line totals, before tax.
    #[ts(as = "String")]
    pub subtotal: Money,

    /// GST on the subtotal.
    #[ts(as = "String")]
    pub gst_amount: Money,

    /// Subtotal plus GST.
    #[ts(as = "String")]
    pub grand_total: Money,

    /// Kitchen-facing lifecycle status; `pending` at creation.
    pub status: BillStatus,

    /// Generation time of the snapshot.
    #[serde(rename = "timestamp")]
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Bill {
    /// Freezes a ledger snapshot into a bill.
    ///
    /// Totals come from [`compute_totals`], so the bill always matches what
    /// the live order view showed. Customization notes that are empty after
    /// trimming are dropped so the serialized document carries the field
    /// only when there is something in it.
    pub fn from_ledger(ledger: &Ledger, table_number: u32, rate: GstRate) -> Self {
        let OrderTotals {
            subtotal,
            gst_amount,
            grand_total,
        } = compute_totals(ledger, rate);

        let items = ledger
            .lines()
            .iter()
            .cloned()
            .map(|mut line| {
                line.customization = line
                    .customization
                    .map(|notes| notes.trim().to_string())
                    .filter(|notes| !notes.is_empty());
                line
            })
            .collect();

        Bill {
            id: Uuid::new_v4().to_string(),
            table_number,
            items,
            subtotal,
            gst_amount,
            grand_total,
            status: BillStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Pre-submission checks: the bill must have at least one line and all
    /// three money fields must survive a wire-format round trip.
    ///
    /// A failure here is non-fatal to the guest journey; the checkout flow
    /// skips the remote write and advances with a warning instead.
    pub fn validate(&self) -> CoreResult<()> {
        if self.items.is_empty() {
            return Err(CoreError::InvalidBill {
                reason: "bill has no items".to_string(),
            });
        }

        for (field, money) in [
            ("subtotal", self.subtotal),
            ("gstAmount", self.gst_amount),
            ("grandTotal", self.grand_total),
        ] {
            let parsed: Money = money.to_string().parse().map_err(|_| CoreError::InvalidBill {
                reason: format!("{} does not parse as a currency amount", field),
            })?;
            if parsed != money {
                return Err(CoreError::InvalidBill {
                    reason: format!("{} does not round-trip through the wire format", field),
                });
            }
        }

        Ok(())
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
        Catalog::new(vec![MenuItem {
            id: "thali".to_string(),
            name: "Veg Thali".to_string(),
            price: Money::from_paise(25000),
            pieces: None,
            description: None,
            category: "Mains".to_string(),
            is_available: true,
        }])
    }

    fn two_thali_ledger() -> Ledger {
        apply_additions(
            &Ledger::new(),
            &[OrderRequest::plain("Veg Thali", 2).unwrap()],
            &test_catalog(),
        )
        .ledger
    }

    #[test]
    fn test_from_ledger_freezes_totals() {
        let bill = Bill::from_ledger(&two_thali_ledger(), 7, GstRate::from_bps(500));

        assert_eq!(bill.table_number, 7);
        assert_eq!(bill.items.len(), 1);
        assert_eq!(bill.subtotal.to_string(), "₹500.00");
        assert_eq!(bill.gst_amount.to_string(), "₹25.00");
        assert_eq!(bill.grand_total.to_string(), "₹525.00");
        assert_eq!(bill.status, BillStatus::Pending);
    }

    #[test]
    fn test_validate_accepts_normal_bill() {
        let bill = Bill::from_ledger(&two_thali_ledger(), 7, GstRate::default());
        assert!(bill.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_bill() {
        let bill = Bill::from_ledger(&Ledger::new(), 7, GstRate::default());
        assert!(matches!(
            bill.validate(),
            Err(CoreError::InvalidBill { .. })
        ));
    }

    #[test]
    fn test_serialization_shape() {
        let bill = Bill::from_ledger(&two_thali_ledger(), 12, GstRate::from_bps(500));
        let json = serde_json::to_value(&bill).unwrap();

        assert_eq!(json["tableNumber"], 12);
        assert_eq!(json["subtotal"], "₹500.00");
        assert_eq!(json["gstAmount"], "₹25.00");
        assert_eq!(json["grandTotal"], "₹525.00");
        assert_eq!(json["status"], "pending");
        assert!(json.get("timestamp").is_some());
        assert!(json.get("createdAt").is_none());
        // Plain lines carry no customization field at all.
        assert!(json["items"][0].get("customizationNotes").is_none());
    }

    #[test]
    fn test_bill_is_not_rederived_from_later_ledger() {
        let catalog = test_catalog();
        let ledger = two_thali_ledger();
        let bill = Bill::from_ledger(&ledger, 3, GstRate::from_bps(500));

        // Guest keeps ordering after the snapshot...
        let _grown = apply_additions(
            &ledger,
            &[OrderRequest::plain("Veg Thali", 5).unwrap()],
            &catalog,
        );

        // ...the bill does not move.
        assert_eq!(bill.items[0].quantity, 2);
        assert_eq!(bill.subtotal.to_string(), "₹500.00");
    }
}
