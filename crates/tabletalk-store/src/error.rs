//! # Store Error Types
//!
//! Error types for catalog and bill persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  I/O error (std::io) / HTTP error (reqwest) / JSON error (serde)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionError (session crate) ← What the guest-facing layer sees       │
//! │                                                                         │
//! │  Catalog-load errors never escape the store: the fallback chain        │
//! │  swallows them (logging each step) and ends at the built-in menu.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A local file could not be read or written.
    #[error("File access failed for {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A cached or fetched document failed to deserialize.
    #[error("Malformed data in {context}: {message}")]
    Malformed { context: String, message: String },

    /// A menu file row could not be parsed.
    #[error("Menu file row {row} is invalid: {reason}")]
    MenuRow { row: usize, reason: String },

    /// The remote bills collection rejected a write.
    #[error("Bill submission rejected with HTTP {status}")]
    Rejected { status: u16 },

    /// The remote bills collection could not be reached.
    #[error("Bill submission failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl StoreError {
    /// Creates a File error with path context.
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::File {
            path: path.into(),
            source,
        }
    }

    /// Creates a Malformed error.
    pub fn malformed(context: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Malformed {
            context: context.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::malformed("json document", err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Rejected { status: 503 };
        assert_eq!(err.to_string(), "Bill submission rejected with HTTP 503");

        let err = StoreError::MenuRow {
            row: 4,
            reason: "price is not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Menu file row 4 is invalid: price is not a number"
        );
    }
}
