//! # tabletalk-store: Persistence Layer for TableTalk
//!
//! This crate owns every file and network operation in the system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       TableTalk Data Flow                               │
//! │                                                                         │
//! │  Session start                          Checkout                       │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  tabletalk-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐         ┌────────────────────┐        │   │
//! │  │   │   CatalogSource    │         │     BillStore      │        │   │
//! │  │   │  cache → file →    │         │  one append-only   │        │   │
//! │  │   │  built-in default  │         │  insert per order  │        │   │
//! │  │   └────────────────────┘         └────────────────────┘        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  Local files                         Kitchen service (`bills`)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog_source`] - Catalog fallback chain and menu file parsing
//! - [`bills`] - BillStore trait + HTTP and in-memory implementations
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bills;
pub mod catalog_source;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use bills::{BillStore, HttpBillStore, MemoryBillStore};
pub use catalog_source::{default_menu, CatalogSource};
pub use error::{StoreError, StoreResult};
