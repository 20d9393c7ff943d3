//! # Session State
//!
//! The single explicit state struct for a guest session, updated only
//! through the pure [`reduce`] function.
//!
//! ## State Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SessionState                                      │
//! │                                                                         │
//! │   page          where the guest is in the journey                      │
//! │   table_number  set once at the start, kept for the whole session      │
//! │   ledger        the running order (replaced wholesale by the engine)   │
//! │   bill          the frozen checkout snapshot, once one exists          │
//! │                                                                         │
//! │   Welcome → TableEntry → Chat ⇄ Bill → Confirmation                    │
//! │                           ▲                  │                          │
//! │                           └── new order ─────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no ambient or static state anywhere in the session layer; the
//! coordinator owns one `SessionState` value and threads it through
//! `reduce`. Reducers never perform I/O.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tabletalk_core::{Bill, Ledger};

// =============================================================================
// Page
// =============================================================================

/// The guest-visible page. Routing/rendering is the front end's job; the
/// session only records where the journey stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Landing page after scanning the table code.
    Welcome,
    /// Table number entry form.
    TableEntry,
    /// The ordering chat.
    Chat,
    /// Generated bill review.
    Bill,
    /// Post-checkout confirmation.
    Confirmation,
}

// =============================================================================
// Session State + Events
// =============================================================================

/// Everything a guest session owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub page: Page,
    pub table_number: Option<u32>,
    pub ledger: Ledger,
    pub bill: Option<Bill>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            page: Page::Welcome,
            table_number: None,
            ledger: Ledger::new(),
            bill: None,
        }
    }
}

/// A state transition. Produced by the coordinator, consumed by [`reduce`].
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The guest tapped through the welcome page.
    Started,
    /// A valid table number was entered.
    TableEntered(u32),
    /// The engine produced a replacement ledger.
    LedgerReplaced(Ledger),
    /// A bill snapshot was frozen for review.
    BillPrepared(Bill),
    /// Checkout finished; `persisted` is false on the degraded
    /// skipped-write path, in which case the ledger is kept.
    OrderConfirmed { persisted: bool },
    /// The guest started a fresh order at the same table.
    NewOrderStarted,
}

/// Pure reducer: consumes the previous state, returns the next one.
pub fn reduce(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::Started => SessionState {
            page: Page::TableEntry,
            ..state
        },
        SessionEvent::TableEntered(table) => SessionState {
            page: Page::Chat,
            table_number: Some(table),
            ..state
        },
        SessionEvent::LedgerReplaced(ledger) => SessionState { ledger, ..state },
        SessionEvent::BillPrepared(bill) => SessionState {
            page: Page::Bill,
            bill: Some(bill),
            ..state
        },
        SessionEvent::OrderConfirmed { persisted } => SessionState {
            page: Page::Confirmation,
            ledger: if persisted { Ledger::new() } else { state.ledger },
            ..state
        },
        SessionEvent::NewOrderStarted => SessionState {
            page: Page::Chat,
            ledger: Ledger::new(),
            bill: None,
            ..state
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
