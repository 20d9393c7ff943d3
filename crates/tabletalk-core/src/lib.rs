//! # tabletalk-core: Pure Business Logic for TableTalk
//!
//! This crate is the **heart** of TableTalk. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       TableTalk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Web Front End (guest's phone)                  │   │
//! │  │   Table entry ──► Chat with assistant ──► Bill ──► Confirmed   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ structured requests                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tabletalk-session (coordinator)                 │   │
//! │  │     session state, transcript, checkout state machine          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tabletalk-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  money   │ │ catalog  │ │  ledger  │ │  engine  │          │   │
//! │  │   │  Money   │ │ MenuItem │ │OrderLine │ │ add/rm   │          │   │
//! │  │   │ GstRate  │ │  lookup  │ │  Ledger  │ │  rules   │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐                       │   │
//! │  │   │ pricing  │ │   bill   │ │validation│                       │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘                       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tabletalk-store (I/O layer)                    │   │
//! │  │        catalog source fallback chain, bills collection         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, OrderRequest, GstRate)
//! - [`money`] - Money type with integer paise arithmetic (no floating point!)
//! - [`catalog`] - Immutable menu catalog with normalized name lookup
//! - [`ledger`] - The running order (OrderLine, Ledger)
//! - [`engine`] - Reconciliation of add/remove request batches
//! - [`pricing`] - Subtotal / GST / grand total calculator
//! - [`bill`] - Immutable checkout snapshot
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tabletalk_core::catalog::Catalog;
//! use tabletalk_core::engine::apply_additions;
//! use tabletalk_core::ledger::Ledger;
//! use tabletalk_core::money::Money;
//! use tabletalk_core::pricing::compute_totals;
//! use tabletalk_core::types::{GstRate, MenuItem, OrderRequest};
//!
//! let catalog = Catalog::new(vec![MenuItem {
//!     id: "burger".to_string(),
//!     name: "Burger".to_string(),
//!     price: Money::from_paise(10000),
//!     pieces: None,
//!     description: None,
//!     category: "Mains".to_string(),
//!     is_available: true,
//! }]);
//!
//! let request = OrderRequest::plain("burger", 2).unwrap();
//! let outcome = apply_additions(&Ledger::new(), &[request], &catalog);
//!
//! let totals = compute_totals(&outcome.ledger, GstRate::from_bps(500));
//! assert_eq!(totals.subtotal.to_string(), "₹200.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tabletalk_core::Money` instead of
// `use tabletalk_core::money::Money`

pub use bill::{Bill, BillStatus};
pub use catalog::Catalog;
pub use engine::{apply_additions, apply_removals, AdditionsOutcome, RemovalsOutcome};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{Ledger, OrderLine};
pub use money::Money;
pub use pricing::{compute_totals, OrderTotals};
pub use types::{GstRate, MenuItem, OrderRequest};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default GST rate in basis points (500 = 5%, the restaurant service rate).
pub const DEFAULT_GST_RATE_BPS: u32 = 500;

/// Maximum quantity of a single order line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (the assistant mishearing
/// "one hundred" for "one hundred grams", a guest typing 1000 for 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum table number accepted at session start.
///
/// ## Business Reason
/// Bounds the keyed-in table number to something a restaurant floor can
/// actually have; anything larger is a typo.
pub const MAX_TABLE_NUMBER: u32 = 200;

/// Maximum length of a customization note, in characters.
pub const MAX_CUSTOMIZATION_LEN: usize = 200;
