//! # Validation Module
//!
//! Input validation utilities for TableTalk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (web page)                                          │
//! │  ├── Basic format checks (empty table number field)                    │
//! │  └── Immediate guest feedback                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── OrderRequest construction (name, quantity, notes)                 │
//! │  └── Table number entry                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine clamps (removal >= quantity deletes the line)         │
//! │                                                                         │
//! │  The assistant upstream is trusted to produce positive quantities;     │
//! │  the constructor check here is what makes that trust safe.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tabletalk_core::validation::{validate_quantity, validate_table_number};
//!
//! validate_quantity(5).unwrap();
//! validate_table_number(12).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_CUSTOMIZATION_LEN, MAX_LINE_QUANTITY, MAX_TABLE_NUMBER};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Request Field Validators
// =============================================================================

/// Validates an item name from an order request.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a request quantity.
///
/// ## Rules
/// - Must be at least 1 (a zero or negative request is upstream garbage)
/// - Must be at most [`MAX_LINE_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 || quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates customization notes.
///
/// ## Rules
/// - At most [`MAX_CUSTOMIZATION_LEN`] characters
/// - Emptiness is fine; the request constructor normalizes it to absent
pub fn validate_customization(notes: &str) -> ValidationResult<()> {
    if notes.trim().len() > MAX_CUSTOMIZATION_LEN {
        return Err(ValidationError::TooLong {
            field: "customization".to_string(),
            max: MAX_CUSTOMIZATION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Table Number
// =============================================================================

/// Validates a table number entered at the start of a session.
///
/// ## Rules
/// - Between 1 and [`MAX_TABLE_NUMBER`] inclusive
pub fn validate_table_number(table: u32) -> ValidationResult<()> {
    if table < 1 || table > MAX_TABLE_NUMBER {
        return Err(ValidationError::OutOfRange {
            field: "table number".to_string(),
            min: 1,
            max: MAX_TABLE_NUMBER as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
