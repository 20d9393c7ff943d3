//! # Session Coordinator
//!
//! The single controller that owns a guest session.
//!
//! ## Orchestration Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every mutation path is the same three steps:                           │
//! │                                                                         │
//! │     1. run pure core logic (engine / pricing / bill snapshot)          │
//! │     2. push the resulting messages into the transcript sink            │
//! │     3. reduce the session state with the resulting event               │
//! │                                                                         │
//! │  The coordinator itself holds no business rules. It is the only        │
//! │  place the mutable SessionState lives.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use tabletalk_core::{
    apply_additions, apply_removals, compute_totals, validation::validate_table_number, Bill,
    Catalog, OrderRequest, OrderTotals,
};
use tabletalk_store::BillStore;

use crate::checkout::{CheckoutFlow, CheckoutOutcome};
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::state::{reduce, SessionEvent, SessionState};
use crate::transcript::MessageSink;

// =============================================================================
// Session Coordinator
// =============================================================================

/// Owns one session: its state, catalog, transcript sink, and checkout flow.
pub struct SessionCoordinator<S: BillStore, M: MessageSink> {
    config: SessionConfig,
    catalog: Catalog,
    state: SessionState,
    sink: M,
    checkout: CheckoutFlow<S>,
}

impl<S: BillStore, M: MessageSink> SessionCoordinator<S, M> {
    /// Creates a coordinator for a fresh session.
    pub fn new(config: SessionConfig, catalog: Catalog, store: S, sink: M) -> Self {
        SessionCoordinator {
            config,
            catalog,
            state: SessionState::default(),
            sink,
            checkout: CheckoutFlow::new(store),
        }
    }

    /// The current session state (read-only; mutations go through events).
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The transcript sink.
    pub fn sink(&self) -> &M {
        &self.sink
    }

    /// The session catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The guest tapped through the welcome page.
    pub fn begin(&mut self) {
        self.apply(SessionEvent::Started);
    }

    /// The guest entered a table number.
    pub fn enter_table(&mut self, table: u32) -> SessionResult<()> {
        validate_table_number(table)?;
        debug!(table, "Table entered");
        self.apply(SessionEvent::TableEntered(table));
        self.sink.say(format!(
            "Welcome to {}! You're at table {}. Tell me what you'd like to order.",
            self.config.restaurant_name, table
        ));
        Ok(())
    }

    /// Applies an additions batch from the assistant.
    pub fn order_items(&mut self, requests: &[OrderRequest]) {
        debug!(batch = requests.len(), "Applying additions");
        let outcome = apply_additions(&self.state.ledger, requests, &self.catalog);
        for message in outcome.messages() {
            self.sink.say(message);
        }
        self.apply(SessionEvent::LedgerReplaced(outcome.ledger));
    }

    /// Applies a removals batch from the assistant.
    pub fn remove_items(&mut self, requests: &[OrderRequest]) {
        debug!(batch = requests.len(), "Applying removals");
        let outcome = apply_removals(&self.state.ledger, requests, &self.catalog);
        for message in outcome.messages() {
            self.sink.say(message);
        }
        self.apply(SessionEvent::LedgerReplaced(outcome.ledger));
    }

    /// Totals for the live order view. Same function checkout uses.
    pub fn live_totals(&self) -> OrderTotals {
        compute_totals(&self.state.ledger, self.config.gst_rate())
    }

    /// Freezes the current ledger into a bill for the review page.
    pub fn prepare_bill(&mut self) -> SessionResult<Bill> {
        let table = self.state.table_number.ok_or(SessionError::NoTable)?;
        let bill = Bill::from_ledger(&self.state.ledger, table, self.config.gst_rate());
        debug!(bill_id = %bill.id, table, lines = bill.items.len(), "Bill prepared");
        self.apply(SessionEvent::BillPrepared(bill.clone()));
        Ok(bill)
    }

    /// Confirms the order: submits the reviewed bill to the kitchen store.
    ///
    /// A confirm while a submission is already in flight is dropped. On
    /// remote failure the guest is alerted and may retry; on the degraded
    /// invalid-snapshot path the journey advances with an explicit notice
    /// instead of a silent skip.
    pub async fn confirm_order(&mut self) -> SessionResult<CheckoutOutcome> {
        let bill = match &self.state.bill {
            Some(bill) => bill.clone(),
            None => self.prepare_bill()?,
        };

        match self.checkout.submit(&bill).await {
            Ok(CheckoutOutcome::DroppedDuplicate) => Ok(CheckoutOutcome::DroppedDuplicate),
            Ok(CheckoutOutcome::Confirmed { persisted }) => {
                if persisted {
                    self.sink.say(format!(
                        "Your order is with the kitchen! Total {} for table {}.",
                        bill.grand_total, bill.table_number
                    ));
                } else {
                    self.sink.say(
                        "We couldn't record your order automatically. \
                         Please show this screen to the staff.",
                    );
                }
                self.apply(SessionEvent::OrderConfirmed { persisted });
                Ok(CheckoutOutcome::Confirmed { persisted })
            }
            Err(err) => {
                self.sink.say(err.user_message());
                Err(err)
            }
        }
    }

    /// Starts a fresh order at the same table.
    pub fn start_new_order(&mut self) {
        debug!("Starting new order");
        self.checkout.reset();
        self.apply(SessionEvent::NewOrderStarted);
        self.sink
            .say("Fresh order started. What would you like this time?");
    }

    /// Threads the state through the pure reducer.
    fn apply(&mut self, event: SessionEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
