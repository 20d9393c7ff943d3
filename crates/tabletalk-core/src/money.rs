//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹10.00 is stored as 1000 paise (i64)                                 │
//! │    Sums and quantity products are exact; rounding happens once,         │
//! │    inside the GST basis-point computation                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Bills travel to the kitchen store and the web front end as JSON, where
//! every monetary field is a currency-prefixed 2-decimal string ("₹250.00").
//! `Money` therefore serializes through its `Display`/`FromStr` forms, and
//! the round trip is exact: `Money::from_str(&x.to_string()) == Ok(x)`.
//!
//! ## Usage
//! ```rust
//! use tabletalk_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(25000); // ₹250.00
//! assert_eq!(price.to_string(), "₹250.00");
//!
//! // Parse back from the wire form
//! let parsed: Money = "₹250.00".parse().unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

use crate::types::GstRate;

/// The currency symbol used in display and wire forms.
pub const CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **String serde form**: Bills are transmitted with money as "₹xx.yy"
///   strings, so serialization goes through `Display` and deserialization
///   through `FromStr`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tabletalk_core::money::Money;
    ///
    /// let price = Money::from_paise(12050); // ₹120.50
    /// assert_eq!(price.paise(), 12050);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// For negative amounts only the rupee part carries the sign:
    /// `from_rupees(-5, 50)` is -₹5.50, not -₹4.50.
    #[inline]
    pub const fn from_rupees(rupees: i64, paise: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - paise)
        } else {
            Money(rupees * 100 + paise)
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the rupee (major unit) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise (minor unit) portion, always 0-99.
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates GST for this amount at the given rate.
    ///
    /// ## Rounding
    /// Uses integer math: `(amount * bps + 5000) / 10000`. The `+5000`
    /// rounds half away from zero at the paise. This is the single place
    /// in the pricing pipeline where rounding occurs; subtotals and grand
    /// totals are exact integer sums.
    ///
    /// ## Example
    /// ```rust
    /// use tabletalk_core::money::Money;
    /// use tabletalk_core::types::GstRate;
    ///
    /// let subtotal = Money::from_paise(20000); // ₹200.00
    /// let rate = GstRate::from_bps(500);       // 5%
    /// assert_eq!(subtotal.calculate_gst(rate).paise(), 1000); // ₹10.00
    /// ```
    pub fn calculate_gst(&self, rate: GstRate) -> Money {
        // i128 to prevent overflow on large amounts
        let gst_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(gst_paise as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tabletalk_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(9900); // ₹99.00
    /// assert_eq!(unit_price.multiply_quantity(3).paise(), 29700);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// Error returned when a currency string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money string {input:?}: {reason}")]
pub struct MoneyParseError {
    /// The offending input, as received.
    pub input: String,
    /// Human-readable reason the parse failed.
    pub reason: String,
}

impl MoneyParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        MoneyParseError {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the wire form: currency symbol + 2-decimal amount.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

/// Parses the wire form back to paise.
///
/// Accepted inputs: `"₹250.00"`, `"250.00"`, `"250"`, `"250.5"` (= ₹250.50),
/// each optionally preceded by `-`. More than two decimal places is an
/// error, not a silent truncation.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix(CURRENCY_SYMBOL).unwrap_or(rest).trim();

        if rest.is_empty() {
            return Err(MoneyParseError::new(s, "empty amount"));
        }

        let (rupee_str, paise_str) = match rest.split_once('.') {
            Some((r, p)) => (r, p),
            None => (rest, ""),
        };

        if paise_str.len() > 2 {
            return Err(MoneyParseError::new(s, "more than 2 decimal places"));
        }

        let rupees: i64 = rupee_str
            .parse()
            .map_err(|_| MoneyParseError::new(s, "rupee part is not a number"))?;
        if rupees < 0 {
            // The sign was already consumed above; a second one is malformed.
            return Err(MoneyParseError::new(s, "misplaced minus sign"));
        }

        let paise: i64 = if paise_str.is_empty() {
            0
        } else {
            // "5" means 50 paise, "05" means 5 paise
            let padded = format!("{:0<2}", paise_str);
            padded
                .parse()
                .map_err(|_| MoneyParseError::new(s, "paise part is not a number"))?
        };

        let magnitude = rupees * 100 + paise;
        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

impl From<Money> for String {
    fn from(money: Money) -> String {
        money.to_string()
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
