//! # Money Module
//!
//! Provides the `Price` type for course prices.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICES ON THE WIRE                                                     │
//! │                                                                         │
//! │  The backend reports prices in whole so'm, but depending on the         │
//! │  endpoint they arrive as:                                               │
//! │    100000        (integer)                                              │
//! │    100000.0      (float)                                                │
//! │    "100000.00"   (decimal column rendered as text)                     │
//! │                                                                         │
//! │  OUR SOLUTION: one integer newtype that accepts all three               │
//! │    Price(100000)  →  "100 000 so'm"                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coursely_core::money::Price;
//!
//! let a = Price::from_som(100_000);
//! let b = Price::from_som(250_000);
//! assert_eq!((a + b).som(), 350_000);
//! assert_eq!((a + b).format(), "350\u{a0}000 so'm");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::CURRENCY_SUFFIX;

/// Digit group separator used by the `uz-UZ` number format (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

// =============================================================================
// Price Type
// =============================================================================

/// A price in whole so'm.
///
/// ## Design Decisions
/// - **i64 (signed)**: the backend never sends negatives, but sums of
///   discounts may in the future
/// - **Lenient decoding**: integers, floats, and numeric strings are all
///   accepted and rounded to the nearest so'm
/// - **Serialized as an integer**
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Price(#[ts(type = "number")] i64);

impl Price {
    /// Zero so'm.
    pub const ZERO: Price = Price(0);

    /// Creates a price from whole so'm.
    #[inline]
    pub const fn from_som(som: i64) -> Self {
        Price(som)
    }

    /// Returns the value in whole so'm.
    #[inline]
    pub const fn som(&self) -> i64 {
        self.0
    }

    /// Checks if the price is zero (free course).
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats the price for display, e.g. `100 000 so'm`.
    ///
    /// Digits are grouped in threes with a no-break space, matching the
    /// `uz-UZ` locale.
    pub fn format(&self) -> String {
        format!("{} {}", group_digits(self.0), CURRENCY_SUFFIX)
    }
}

/// Groups the digits of `value` in threes.
fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawPrice::deserialize(deserializer)? {
            RawPrice::Whole(som) => Ok(Price(som)),
            RawPrice::Fractional(som) => from_fractional(som)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {som}"))),
            RawPrice::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(from_fractional)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {text:?}"))),
        }
    }
}

/// Rounds a fractional amount to whole so'm. `None` if it is not finite or
/// does not fit in an `i64`.
fn from_fractional(som: f64) -> Option<Price> {
    let rounded = som.round();
    (rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64)
        .then(|| Price(rounded as i64))
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Price {
    type Output = Price;

    /// Saturates at the `i64` bounds.
    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
