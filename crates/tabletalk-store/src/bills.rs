//! # Bill Store
//!
//! Append-only persistence of confirmed bills.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       bills collection                                  │
//! │                                                                         │
//! │  The checkout flow performs exactly one kind of write:                 │
//! │                                                                         │
//! │      insert one Bill-shaped document into `bills`                      │
//! │                                                                         │
//! │  No reads, no updates, no deletes. The kitchen dashboard owns          │
//! │  everything after the insert.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `BillStore` is the seam: the session layer holds a store by trait so
//! tests and offline development run against [`MemoryBillStore`] while
//! production uses [`HttpBillStore`].

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use tabletalk_core::Bill;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Bill Store Trait
// =============================================================================

/// Append-only sink for bill documents.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Inserts one bill document. Idempotency is the caller's concern; the
    /// checkout flow guarantees at most one call per confirmed order.
    async fn insert_bill(&self, bill: &Bill) -> StoreResult<()>;
}

/// Stores are commonly shared behind an Arc (the checkout flow holds one
/// while tests keep another handle for assertions).
#[async_trait]
impl<T: BillStore + ?Sized> BillStore for std::sync::Arc<T> {
    async fn insert_bill(&self, bill: &Bill) -> StoreResult<()> {
        (**self).insert_bill(bill).await
    }
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Bill store backed by the kitchen service's HTTP endpoint.
///
/// POSTs the bill document as JSON to `{base_url}/bills`.
#[derive(Debug, Clone)]
pub struct HttpBillStore {
    client: reqwest::Client,
    base_url: String,
}

/// In-flight submissions cannot be cancelled; the request timeout is what
/// bounds how long the checkout flow can stay in `Submitting`.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

impl HttpBillStore {
    /// Creates a store targeting the given base URL
    /// (e.g. `https://kitchen.example.in/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SUBMIT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        HttpBillStore {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BillStore for HttpBillStore {
    async fn insert_bill(&self, bill: &Bill) -> StoreResult<()> {
        let url = format!("{}/bills", self.base_url);
        debug!(bill_id = %bill.id, table = bill.table_number, %url, "Submitting bill");

        let response = self.client.post(&url).json(bill).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
            });
        }

        info!(bill_id = %bill.id, table = bill.table_number, "Bill submitted");
        Ok(())
    }
}

// =============================================================================
// In-Memory Implementation
// =============================================================================

/// Bill store that appends to a Vec. For tests and offline development.
#[derive(Debug, Default)]
pub struct MemoryBillStore {
    bills: Mutex<Vec<Bill>>,
}

impl MemoryBillStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryBillStore::default()
    }

    /// Number of bills inserted so far.
    pub fn len(&self) -> usize {
        self.bills.lock().map(|b| b.len()).unwrap_or(0)
    }

    /// Checks if no bills have been inserted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the inserted bills, in insertion order.
    pub fn bills(&self) -> Vec<Bill> {
        self.bills.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BillStore for MemoryBillStore {
    async fn insert_bill(&self, bill: &Bill) -> StoreResult<()> {
        if let Ok(mut bills) = self.bills.lock() {
            bills.push(bill.clone());
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
