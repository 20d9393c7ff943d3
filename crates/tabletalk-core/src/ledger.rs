//! # Order Ledger
//!
//! The ordered sequence of order lines for the current session.
//!
//! ## Invariants
//! - At most one line exists per `(item id, normalized customization)` pair,
//!   where absent notes and empty notes are the same "plain" key
//! - Every line has quantity >= 1; a line that would drop to zero is removed
//! - Insertion order is preserved on add and otherwise carries no meaning
//!
//! Mutation goes through the reconciliation engine, which clones the ledger,
//! applies a whole request batch to the copy, and hands back the replacement.
//! The ledger itself only offers the primitive edits the engine composes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::normalize;
use crate::money::Money;
use crate::types::{display_with_pieces, MenuItem};

// =============================================================================
// Order Line
// =============================================================================

/// One line of the guest's running order.
///
/// ## Snapshot Pattern
/// Name, price, and piece count are frozen from the menu item at the moment
/// the line is created. If the menu changes mid-session the order keeps the
/// data the guest saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// The menu item's id.
    pub id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    #[ts(as = "String")]
    pub price: Money,

    /// Piece count at time of adding (frozen).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pieces: Option<u32>,

    /// Quantity ordered. Always >= 1.
    pub quantity: i64,

    /// Customization notes; `None` for a plain line. Never `Some("")` —
    /// the request constructor and `from_menu_item` collapse empty notes
    /// to absent, and serialization skips the field entirely when absent.
    #[serde(rename = "customizationNotes", skip_serializing_if = "Option::is_none")]
    pub customization: Option<String>,
}

impl OrderLine {
    /// Creates an order line from a menu item snapshot.
    pub fn from_menu_item(item: &MenuItem, quantity: i64, customization: Option<String>) -> Self {
        let customization = customization
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        OrderLine {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            pieces: item.pieces,
            quantity,
            customization,
        }
    }

    /// The normalized customization key: `""` for a plain line.
    pub fn customization_key(&self) -> String {
        self.customization
            .as_deref()
            .map(normalize)
            .unwrap_or_default()
    }

    /// The guest-facing description of this line:
    /// `name (Npcs) (Custom: notes)`, with each suffix only when present.
    ///
    /// ## Example
    /// "Veg Momos (6pcs) (Custom: extra chutney)"
    pub fn describe(&self) -> String {
        let mut out = display_with_pieces(&self.name, self.pieces);
        if let Some(notes) = &self.customization {
            out.push_str(&format!(" (Custom: {})", notes));
        }
        out
    }

    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Ledger
// =============================================================================

/// The running order for a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    lines: Vec<OrderLine>,
}

impl Ledger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Ledger { lines: Vec::new() }
    }

    /// The order lines, in insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Finds the line for `(item id, customization)`, where `None` and empty
    /// notes both mean the plain line.
    pub fn find_line(&self, item_id: &str, customization: Option<&str>) -> Option<&OrderLine> {
        let key = customization.map(normalize).unwrap_or_default();
        self.position_of(item_id, &key).map(|idx| &self.lines[idx])
    }

    /// Index of the line matching `(item id, normalized customization key)`.
    pub(crate) fn position_of(&self, item_id: &str, customization_key: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.id == item_id && l.customization_key() == customization_key)
    }

    /// Increments the quantity of the line at `idx`.
    pub(crate) fn increment(&mut self, idx: usize, by: i64) {
        self.lines[idx].quantity += by;
    }

    /// Decrements the quantity of the line at `idx`.
    /// Callers must have established `by < quantity`; the engine's clamp
    /// removes the whole line instead of decrementing through zero.
    pub(crate) fn decrement(&mut self, idx: usize, by: i64) {
        self.lines[idx].quantity -= by;
    }

    /// Removes and returns the line at `idx`.
    pub(crate) fn remove_line(&mut self, idx: usize) -> OrderLine {
        self.lines.remove(idx)
    }

    /// Appends a new line at the end, preserving insertion order.
    pub(crate) fn append(&mut self, line: OrderLine) {
        self.lines.push(line);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn momos() -> MenuItem {
        MenuItem {
            id: "momo-veg".to_string(),
            name: "Veg Momos".to_string(),
            price: Money::from_paise(12000),
            pieces: Some(6),
            description: None,
            category: "Starters".to_string(),
            is_available: true,
        }
    }

    #[test]
    fn test_from_menu_item_freezes_snapshot() {
        let line = OrderLine::from_menu_item(&momos(), 2, None);
        assert_eq!(line.id, "momo-veg");
        assert_eq!(line.name, "Veg Momos");
        assert_eq!(line.price.paise(), 12000);
        assert_eq!(line.pieces, Some(6));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.customization, None);
    }

    #[test]
    fn test_empty_customization_collapses_to_plain() {
        let line = OrderLine::from_menu_item(&momos(), 1, Some("   ".to_string()));
        assert_eq!(line.customization, None);
        assert_eq!(line.customization_key(), "");
    }

    #[test]
    fn test_customization_key_is_normalized() {
        let line = OrderLine::from_menu_item(&momos(), 1, Some(" Extra Chutney ".to_string()));
        assert_eq!(line.customization.as_deref(), Some("Extra Chutney"));
        assert_eq!(line.customization_key(), "extra chutney");
    }

    #[test]
    fn test_describe() {
        let plain = OrderLine::from_menu_item(&momos(), 1, None);
        assert_eq!(plain.describe(), "Veg Momos (6pcs)");

        let custom = OrderLine::from_menu_item(&momos(), 1, Some("extra chutney".to_string()));
        assert_eq!(custom.describe(), "Veg Momos (6pcs) (Custom: extra chutney)");
    }

    #[test]
    fn test_line_total() {
        let line = OrderLine::from_menu_item(&momos(), 3, None);
        assert_eq!(line.line_total().paise(), 36000);
    }

    #[test]
    fn test_find_line_plain_and_custom() {
        let mut ledger = Ledger::new();
        ledger.append(OrderLine::from_menu_item(&momos(), 2, None));
        ledger.append(OrderLine::from_menu_item(
            &momos(),
            1,
            Some("extra chutney".to_string()),
        ));

        assert_eq!(ledger.find_line("momo-veg", None).unwrap().quantity, 2);
        assert_eq!(ledger.find_line("momo-veg", Some("")).unwrap().quantity, 2);
        assert_eq!(
            ledger
                .find_line("momo-veg", Some("EXTRA CHUTNEY"))
                .unwrap()
                .quantity,
            1
        );
        assert!(ledger.find_line("momo-veg", Some("no chutney")).is_none());
    }

    #[test]
    fn test_serialization_skips_absent_customization() {
        let line = OrderLine::from_menu_item(&momos(), 1, None);
        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("customizationNotes").is_none());

        let custom = OrderLine::from_menu_item(&momos(), 1, Some("no onion".to_string()));
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(json["customizationNotes"], "no onion");
    }
}
