//! # Reconciliation Engine
//!
//! Maps batches of structured add/remove requests onto the order ledger.
//!
//! ## Addition Rules (checked in order, per request)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Request: { item, quantity, customization }                             │
//! │                                                                         │
//! │  0. Name not on menu ────────────────► record as not-found, skip       │
//! │                                                                         │
//! │  1. EXACT MATCH                                                         │
//! │     A line with the same item id and the same normalized notes         │
//! │     exists ──────────────────────────► increment its quantity          │
//! │                                                                         │
//! │  2. CUSTOMIZATION TRANSFORM (customized request only)                  │
//! │     No exact match, but a PLAIN line for the item exists ──►           │
//! │     remove the plain line, append a customized line with the          │
//! │     REQUESTED quantity. The plain quantity is discarded, not           │
//! │     added: the guest is changing the order, not extending it.          │
//! │                                                                         │
//! │  3. NEW LINE                                                            │
//! │     Append a fresh line at the end of the ledger                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Requests in a batch are processed in input order against a working copy
//! that accumulates earlier effects, so "2 momos" followed by "1 momo" in
//! the same batch merges into one line of 3.
//!
//! Removals resolve the same way (menu lookup, then exact line match) and
//! clamp at zero: asking to remove more than is on a line deletes the line.
//!
//! The engine is pure: it returns a replacement ledger plus outcome data.
//! The session layer forwards the outcome's messages into the chat
//! transcript sink.

use crate::catalog::{normalize, Catalog};
use crate::ledger::{Ledger, OrderLine};
use crate::types::OrderRequest;

/// The fallback reply when a batch resolves to nothing actionable at all.
const COULD_NOT_IDENTIFY: &str =
    "Sorry, I couldn't identify any items in that request. Could you rephrase?";

// =============================================================================
// Outcomes
// =============================================================================

/// Result of applying an additions batch.
#[derive(Debug, Clone)]
pub struct AdditionsOutcome {
    /// The replacement ledger.
    pub ledger: Ledger,

    /// Item names that did not resolve against the catalog, in request order.
    pub not_found: Vec<String>,

    /// One guest-facing description per applied request, in request order.
    pub actions: Vec<String>,
}

impl AdditionsOutcome {
    /// Assembles the transcript messages for this batch: every action, one
    /// combined not-found report, and the generic fallback only when the
    /// batch resolved to nothing at all.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = self.actions.clone();
        if !self.not_found.is_empty() {
            messages.push(format!(
                "Sorry, I couldn't find these on the menu: {}.",
                self.not_found.join(", ")
            ));
        }
        if messages.is_empty() {
            messages.push(COULD_NOT_IDENTIFY.to_string());
        }
        messages
    }
}

/// Result of applying a removals batch.
#[derive(Debug, Clone)]
pub struct RemovalsOutcome {
    /// The replacement ledger.
    pub ledger: Ledger,

    /// Requests that could not be applied, each annotated with the reason
    /// ("(not on menu)" or "(not in current order or exact customization
    /// not found)").
    pub unresolved: Vec<String>,

    /// One guest-facing description per applied request, in request order.
    pub actions: Vec<String>,
}

impl RemovalsOutcome {
    /// Assembles the transcript messages for this batch. Same policy as
    /// [`AdditionsOutcome::messages`].
    pub fn messages(&self) -> Vec<String> {
        let mut messages = self.actions.clone();
        if !self.unresolved.is_empty() {
            messages.push(format!(
                "Sorry, I couldn't remove: {}.",
                self.unresolved.join("; ")
            ));
        }
        if messages.is_empty() {
            messages.push(COULD_NOT_IDENTIFY.to_string());
        }
        messages
    }
}

// =============================================================================
// Additions
// =============================================================================

/// Applies a batch of add-requests to a ledger snapshot.
pub fn apply_additions(
    ledger: &Ledger,
    requests: &[OrderRequest],
    catalog: &Catalog,
) -> AdditionsOutcome {
    let mut working = ledger.clone();
    let mut not_found = Vec::new();
    let mut actions = Vec::new();

    for request in requests {
        let Some(item) = catalog.resolve(&request.item_name) else {
            not_found.push(request.item_name.trim().to_string());
            continue;
        };

        let notes_key = request
            .customization
            .as_deref()
            .map(normalize)
            .unwrap_or_default();

        // Rule 1: exact (item, customization) match.
        if let Some(idx) = working.position_of(&item.id, &notes_key) {
            working.increment(idx, request.quantity);
            actions.push(format!(
                "Increased quantity of {} by {}.",
                working.lines()[idx].describe(),
                request.quantity
            ));
            continue;
        }

        // Rule 2: customized request upgrading an existing plain line.
        // The plain line's quantity is discarded, not carried over.
        if !notes_key.is_empty() {
            if let Some(plain_idx) = working.position_of(&item.id, "") {
                let plain = working.remove_line(plain_idx);
                let line =
                    OrderLine::from_menu_item(item, request.quantity, request.customization.clone());
                actions.push(format!(
                    "Changed {} x {} to {} x {}.",
                    plain.quantity,
                    plain.describe(),
                    request.quantity,
                    line.describe()
                ));
                working.append(line);
                continue;
            }
        }

        // Rule 3: brand-new line.
        let line = OrderLine::from_menu_item(item, request.quantity, request.customization.clone());
        actions.push(format!("Added {} x {}.", request.quantity, line.describe()));
        working.append(line);
    }

    AdditionsOutcome {
        ledger: working,
        not_found,
        actions,
    }
}

// =============================================================================
// Removals
// =============================================================================

/// Applies a batch of remove-requests to a ledger snapshot.
pub fn apply_removals(
    ledger: &Ledger,
    requests: &[OrderRequest],
    catalog: &Catalog,
) -> RemovalsOutcome {
    let mut working = ledger.clone();
    let mut unresolved = Vec::new();
    let mut actions = Vec::new();

    for request in requests {
        let Some(item) = catalog.resolve(&request.item_name) else {
            unresolved.push(format!("{} (not on menu)", request.item_name.trim()));
            continue;
        };

        let notes_key = request
            .customization
            .as_deref()
            .map(normalize)
            .unwrap_or_default();

        let Some(idx) = working.position_of(&item.id, &notes_key) else {
            let described = match &request.customization {
                Some(notes) => format!("{} (Custom: {})", item.display_name(), notes),
                None => item.display_name(),
            };
            unresolved.push(format!(
                "{} (not in current order or exact customization not found)",
                described
            ));
            continue;
        };

        // The >= comparison is the clamp: quantities never go negative and
        // a line never survives at zero.
        if request.quantity >= working.lines()[idx].quantity {
            let removed = working.remove_line(idx);
            actions.push(format!("Removed all {}.", removed.describe()));
        } else {
            working.decrement(idx, request.quantity);
            actions.push(format!(
                "Reduced {} by {}.",
                working.lines()[idx].describe(),
                request.quantity
            ));
        }
    }

    RemovalsOutcome {
        ledger: working,
        unresolved,
        actions,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::MenuItem;
    use std::collections::HashSet;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            MenuItem {
                id: "burger".to_string(),
                name: "Burger".to_string(),
                price: Money::from_paise(10000),
                pieces: None,
                description: None,
                category: "Mains".to_string(),
                is_available: true,
            },
            MenuItem {
                id: "momo-veg".to_string(),
                name: "Veg Momos".to_string(),
                price: Money::from_paise(12000),
                pieces: Some(6),
                description: None,
                category: "Starters".to_string(),
                is_available: true,
            },
            MenuItem {
                id: "coffee".to_string(),
                name: "Filter Coffee".to_string(),
                price: Money::from_paise(4000),
                pieces: None,
                description: None,
                category: "Beverages".to_string(),
                is_available: true,
            },
        ])
    }

    fn req(name: &str, qty: i64) -> OrderRequest {
        OrderRequest::plain(name, qty).unwrap()
    }

    fn req_custom(name: &str, qty: i64, notes: &str) -> OrderRequest {
        OrderRequest::new(name, qty, Some(notes.to_string())).unwrap()
    }

    /// No two lines may ever share an (item, normalized notes) identity.
    fn assert_no_duplicate_identity(ledger: &Ledger) {
        let mut seen = HashSet::new();
        for line in ledger.lines() {
            assert!(
                seen.insert((line.id.clone(), line.customization_key())),
                "duplicate line identity for {}",
                line.describe()
            );
        }
    }

    #[test]
    fn test_add_to_empty_ledger() {
        let catalog = test_catalog();
        let outcome = apply_additions(&Ledger::new(), &[req("Burger", 2)], &catalog);

        assert_eq!(outcome.ledger.len(), 1);
        assert_eq!(outcome.ledger.lines()[0].quantity, 2);
        assert_eq!(outcome.actions, vec!["Added 2 x Burger.".to_string()]);
        assert!(outcome.not_found.is_empty());
    }

    #[test]
    fn test_exact_match_increments() {
        let catalog = test_catalog();
        let ledger = apply_additions(&Ledger::new(), &[req("Burger", 2)], &catalog).ledger;
        let outcome = apply_additions(&ledger, &[req("burger", 3)], &catalog);

        assert_eq!(outcome.ledger.len(), 1);
        assert_eq!(outcome.ledger.lines()[0].quantity, 5);
        assert_eq!(
            outcome.actions,
            vec!["Increased quantity of Burger by 3.".to_string()]
        );
    }

    #[test]
    fn test_exact_match_on_normalized_notes() {
        let catalog = test_catalog();
        let ledger = apply_additions(
            &Ledger::new(),
            &[req_custom("Burger", 1, "No Onion")],
            &catalog,
        )
        .ledger;
        let outcome = apply_additions(&ledger, &[req_custom("Burger", 2, "no onion")], &catalog);

        assert_eq!(outcome.ledger.len(), 1);
        assert_eq!(outcome.ledger.lines()[0].quantity, 3);
        // The first spelling of the notes is the one kept on the line.
        assert_eq!(
            outcome.ledger.lines()[0].customization.as_deref(),
            Some("No Onion")
        );
    }

    #[test]
    fn test_transform_discards_plain_quantity() {
        let catalog = test_catalog();
        let ledger = apply_additions(&Ledger::new(), &[req("Burger", 3)], &catalog).ledger;
        let outcome = apply_additions(&ledger, &[req_custom("Burger", 1, "no onion")], &catalog);

        // Exactly one Burger line remains: customized, quantity 1 (not 4).
        assert_eq!(outcome.ledger.len(), 1);
        let line = &outcome.ledger.lines()[0];
        assert_eq!(line.quantity, 1);
        assert_eq!(line.customization.as_deref(), Some("no onion"));
        assert_eq!(
            outcome.actions,
            vec!["Changed 3 x Burger to 1 x Burger (Custom: no onion).".to_string()]
        );
        assert_no_duplicate_identity(&outcome.ledger);
    }

    #[test]
    fn test_customized_line_does_not_transform_when_exact_match_exists() {
        let catalog = test_catalog();
        let ledger = apply_additions(
            &Ledger::new(),
            &[req("Burger", 3), req_custom("Burger", 2, "no onion")],
            &catalog,
        )
        .ledger;
        assert_eq!(ledger.len(), 2);

        // Another "no onion" request hits the exact-match rule; the plain
        // line is untouched.
        let outcome = apply_additions(&ledger, &[req_custom("Burger", 1, "no onion")], &catalog);
        assert_eq!(outcome.ledger.len(), 2);
        assert_eq!(outcome.ledger.find_line("burger", None).unwrap().quantity, 3);
        assert_eq!(
            outcome
                .ledger
                .find_line("burger", Some("no onion"))
                .unwrap()
                .quantity,
            3
        );
    }

    #[test]
    fn test_plain_request_never_touches_customized_line() {
        let catalog = test_catalog();
        let ledger = apply_additions(
            &Ledger::new(),
            &[req_custom("Burger", 2, "no onion")],
            &catalog,
        )
        .ledger;

        let outcome = apply_additions(&ledger, &[req("Burger", 1)], &catalog);
        assert_eq!(outcome.ledger.len(), 2);
        assert_eq!(outcome.ledger.find_line("burger", None).unwrap().quantity, 1);
    }

    #[test]
    fn test_batch_accumulates_within_itself() {
        let catalog = test_catalog();
        let outcome = apply_additions(
            &Ledger::new(),
            &[req("Veg Momos", 2), req("veg momos", 1)],
            &catalog,
        );

        assert_eq!(outcome.ledger.len(), 1);
        assert_eq!(outcome.ledger.lines()[0].quantity, 3);
        assert_eq!(outcome.actions.len(), 2);
    }

    #[test]
    fn test_unresolvable_names_leave_ledger_unchanged() {
        let catalog = test_catalog();
        let ledger = apply_additions(&Ledger::new(), &[req("Burger", 1)], &catalog).ledger;
        let outcome = apply_additions(
            &ledger,
            &[req("Pizza", 1), req("Sushi", 2)],
            &catalog,
        );

        assert_eq!(outcome.ledger, ledger);
        assert_eq!(outcome.not_found, vec!["Pizza", "Sushi"]);

        // Exactly one message, listing all unresolved names.
        let messages = outcome.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            "Sorry, I couldn't find these on the menu: Pizza, Sushi."
        );
    }

    #[test]
    fn test_empty_batch_reports_generic_message() {
        let catalog = test_catalog();
        let outcome = apply_additions(&Ledger::new(), &[], &catalog);
        assert!(outcome.ledger.is_empty());
        assert_eq!(outcome.messages(), vec![COULD_NOT_IDENTIFY.to_string()]);

        let outcome = apply_removals(&Ledger::new(), &[], &catalog);
        assert_eq!(outcome.messages(), vec![COULD_NOT_IDENTIFY.to_string()]);
    }

    #[test]
    fn test_mixed_batch_keeps_actions_and_not_found() {
        let catalog = test_catalog();
        let outcome = apply_additions(
            &Ledger::new(),
            &[req("Burger", 1), req("Pizza", 1)],
            &catalog,
        );

        let messages = outcome.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "Added 1 x Burger.");
        assert_eq!(messages[1], "Sorry, I couldn't find these on the menu: Pizza.");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = test_catalog();
        let outcome = apply_additions(
            &Ledger::new(),
            &[req("Filter Coffee", 1), req("Burger", 1), req("Veg Momos", 1)],
            &catalog,
        );

        let ids: Vec<&str> = outcome.ledger.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["coffee", "burger", "momo-veg"]);
    }

    #[test]
    fn test_removal_decrements() {
        let catalog = test_catalog();
        let ledger = apply_additions(&Ledger::new(), &[req("Burger", 3)], &catalog).ledger;
        let outcome = apply_removals(&ledger, &[req("Burger", 2)], &catalog);

        assert_eq!(outcome.ledger.lines()[0].quantity, 1);
        assert_eq!(outcome.actions, vec!["Reduced Burger by 2.".to_string()]);
    }

    #[test]
    fn test_removal_clamps_to_delete() {
        let catalog = test_catalog();
        let ledger = apply_additions(&Ledger::new(), &[req("Burger", 2)], &catalog).ledger;

        // Removing exactly the quantity deletes the line...
        let outcome = apply_removals(&ledger, &[req("Burger", 2)], &catalog);
        assert!(outcome.ledger.is_empty());
        assert_eq!(outcome.actions, vec!["Removed all Burger.".to_string()]);

        // ...and so does removing more than the quantity.
        let outcome = apply_removals(&ledger, &[req("Burger", 99)], &catalog);
        assert!(outcome.ledger.is_empty());
    }

    #[test]
    fn test_removal_requires_exact_customization() {
        let catalog = test_catalog();
        let ledger = apply_additions(
            &Ledger::new(),
            &[req_custom("Burger", 2, "no onion")],
            &catalog,
        )
        .ledger;

        let outcome = apply_removals(&ledger, &[req("Burger", 1)], &catalog);
        assert_eq!(outcome.ledger, ledger);
        assert_eq!(
            outcome.unresolved,
            vec!["Burger (not in current order or exact customization not found)".to_string()]
        );

        let outcome = apply_removals(&ledger, &[req_custom("Burger", 1, "extra cheese")], &catalog);
        assert_eq!(outcome.ledger, ledger);
        assert_eq!(
            outcome.unresolved,
            vec![
                "Burger (Custom: extra cheese) (not in current order or exact customization not found)"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_removal_of_unknown_name() {
        let catalog = test_catalog();
        let outcome = apply_removals(&Ledger::new(), &[req("Pizza", 1)], &catalog);
        assert_eq!(outcome.unresolved, vec!["Pizza (not on menu)".to_string()]);

        let messages = outcome.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], "Sorry, I couldn't remove: Pizza (not on menu).");
    }

    #[test]
    fn test_additions_then_inverse_removals_round_trip() {
        let catalog = test_catalog();
        let base = apply_additions(
            &Ledger::new(),
            &[req("Burger", 2), req_custom("Veg Momos", 1, "extra chutney")],
            &catalog,
        )
        .ledger;

        let batch = vec![req("Filter Coffee", 2), req_custom("Burger", 1, "no onion")];
        // "Burger + no onion" would transform a plain Burger line, so drop
        // the plain Burger from the base before round-tripping.
        let base = apply_removals(&base, &[req("Burger", 2)], &catalog).ledger;

        let added = apply_additions(&base, &batch, &catalog).ledger;
        let restored = apply_removals(&added, &batch, &catalog).ledger;

        let as_set = |l: &Ledger| {
            l.lines()
                .iter()
                .map(|line| (line.id.clone(), line.customization_key(), line.quantity))
                .collect::<HashSet<_>>()
        };
        assert_eq!(as_set(&restored), as_set(&base));
    }

    #[test]
    fn test_no_duplicate_identities_across_many_batches() {
        let catalog = test_catalog();
        let batches: Vec<Vec<OrderRequest>> = vec![
            vec![req("Burger", 2), req("Veg Momos", 1)],
            vec![req_custom("Burger", 1, "no onion"), req("burger", 2)],
            vec![req_custom("Burger", 2, "NO ONION"), req("Filter Coffee", 1)],
            vec![req_custom("Veg Momos", 1, "extra chutney"), req("veg momos", 4)],
        ];

        let mut ledger = Ledger::new();
        for batch in &batches {
            ledger = apply_additions(&ledger, batch, &catalog).ledger;
            assert_no_duplicate_identity(&ledger);
            for line in ledger.lines() {
                assert!(line.quantity >= 1);
            }
        }
    }
}
