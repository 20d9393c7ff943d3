//! # Checkout Flow
//!
//! The submission state machine between "place order" and the kitchen.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout State Machine                             │
//! │                                                                         │
//! │                ┌────────┐  submit   ┌────────────┐                     │
//! │                │  Idle  │──────────►│ Submitting │                     │
//! │                └────────┘           └─────┬──────┘                     │
//! │                     ▲                     │                             │
//! │            remote   │                     │                             │
//! │            failure  │          ┌──────────┴──────────┐                 │
//! │            (retry-  │          ▼                     ▼                 │
//! │             able)   │   invalid snapshot       insert succeeded        │
//! │                     │          │                     │                 │
//! │                     │          ▼                     ▼                 │
//! │                     │  ┌──────────────────────────────────┐            │
//! │                     └──┤  Confirmed { persisted: bool }   │            │
//! │                        └──────────────────────────────────┘            │
//! │                                                                         │
//! │  A submit while not Idle is DROPPED: not queued, not an error.         │
//! │  Two taps in quick succession produce exactly one remote write.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The runtime dispatches events one at a time, but nothing stops the front
//! end from firing `submit` twice before the first await resolves. The
//! check-and-set on the state mutex is what defends that window; the state
//! is flipped to `Submitting` before the flow ever awaits.

use std::sync::Mutex;

use tracing::{debug, error, warn};

use tabletalk_core::Bill;
use tabletalk_store::BillStore;

use crate::error::{SessionError, SessionResult};

// =============================================================================
// States and Outcomes
// =============================================================================

/// Where the checkout stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// No submission underway; submit is allowed.
    Idle,
    /// A submission is in flight; further submits are dropped.
    Submitting,
    /// The order is confirmed. `persisted` is false when the snapshot was
    /// invalid and the remote write was skipped.
    Confirmed { persisted: bool },
}

/// What a `submit` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Another submission was already in flight; this one was dropped.
    DroppedDuplicate,
    /// The order is confirmed (with or without a remote write).
    Confirmed { persisted: bool },
}

// =============================================================================
// Checkout Flow
// =============================================================================

/// Owns the checkout state and the bill store handle.
#[derive(Debug)]
pub struct CheckoutFlow<S: BillStore> {
    state: Mutex<CheckoutState>,
    store: S,
}

impl<S: BillStore> CheckoutFlow<S> {
    /// Creates an idle flow over the given store.
    pub fn new(store: S) -> Self {
        CheckoutFlow {
            state: Mutex::new(CheckoutState::Idle),
            store,
        }
    }

    /// The current state.
    pub fn state(&self) -> CheckoutState {
        *self.state.lock().expect("Checkout state mutex poisoned")
    }

    /// Submits a bill snapshot.
    ///
    /// ## Behavior
    /// - Not `Idle` ⇒ returns [`CheckoutOutcome::DroppedDuplicate`] without
    ///   touching the store
    /// - Invalid snapshot ⇒ skips the write, confirms with
    ///   `persisted: false` (the guest journey still advances)
    /// - Store failure ⇒ resets to `Idle` and returns the error; the guest
    ///   may retry
    pub async fn submit(&self, bill: &Bill) -> SessionResult<CheckoutOutcome> {
        if !self.try_begin() {
            debug!(bill_id = %bill.id, "Submission already in flight, dropping duplicate trigger");
            return Ok(CheckoutOutcome::DroppedDuplicate);
        }

        if let Err(err) = bill.validate() {
            warn!(bill_id = %bill.id, %err, "Bill snapshot invalid; skipping remote write");
            self.set_state(CheckoutState::Confirmed { persisted: false });
            return Ok(CheckoutOutcome::Confirmed { persisted: false });
        }

        match self.store.insert_bill(bill).await {
            Ok(()) => {
                self.set_state(CheckoutState::Confirmed { persisted: true });
                Ok(CheckoutOutcome::Confirmed { persisted: true })
            }
            Err(err) => {
                error!(bill_id = %bill.id, %err, "Bill submission failed");
                self.set_state(CheckoutState::Idle);
                Err(SessionError::from(err))
            }
        }
    }

    /// Returns the flow to `Idle` for a fresh order.
    pub fn reset(&self) {
        self.set_state(CheckoutState::Idle);
    }

    /// Atomically claims the Idle → Submitting transition.
    fn try_begin(&self) -> bool {
        let mut state = self.state.lock().expect("Checkout state mutex poisoned");
        if *state == CheckoutState::Idle {
            *state = CheckoutState::Submitting;
            true
        } else {
            false
        }
    }

    fn set_state(&self, next: CheckoutState) {
        *self.state.lock().expect("Checkout state mutex poisoned") = next;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
