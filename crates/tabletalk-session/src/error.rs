//! # Session Error Type
//!
//! Unified error type for the guest-facing session layer.
//!
//! Lower-layer errors (validation, domain, store) convert into
//! `SessionError` via `From`, and [`SessionError::user_message`] maps each
//! one to the sentence the front end should actually show. The raw error
//! carries the context for logs; the user message never leaks internals.

use thiserror::Error;

use tabletalk_core::{CoreError, ValidationError};
use tabletalk_store::StoreError;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Guest input failed validation (table number, request fields).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A domain rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The remote bills collection write failed.
    #[error("Order submission failed: {0}")]
    Submission(#[from] StoreError),

    /// Checkout was requested before a table number was entered.
    #[error("No table number entered for this session")]
    NoTable,
}

impl SessionError {
    /// The guest-friendly alert text for this error.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Validation(err) => format!("Please check your input: {}.", err),
            SessionError::Core(_) => {
                "Something went wrong with your order. Please try again.".to_string()
            }
            SessionError::Submission(_) => {
                "Sorry, we couldn't place your order. Please try again.".to_string()
            }
            SessionError::NoTable => {
                "Please enter your table number before ordering.".to_string()
            }
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Unit Tests
// =============================================================================
