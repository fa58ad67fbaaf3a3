//! Money type with precise decimal arithmetic
//!
//! This module provides a type-safe representation of rupee amounts using
//! rust_decimal for precise calculations without floating-point errors.
//! The fee ledger is single-currency (INR) by design; amounts are stored
//! rounded to two decimal places.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must not be negative: {0}")]
    Negative(Decimal),

    #[error("Amount must be positive: {0}")]
    NotPositive(Decimal),
}

/// A rupee amount
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Amounts are rounded to two decimal places on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounding to two decimal places
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(2))
    }

    /// Creates Money from a whole-rupee amount
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::new(rupees, 0))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Validates that the amount is non-negative (discounts, fee categories)
    pub fn ensure_non_negative(self) -> Result<Self, MoneyError> {
        if self.is_negative() {
            return Err(MoneyError::Negative(self.0));
        }
        Ok(self)
    }

    /// Validates that the amount is strictly positive (payment amounts)
    pub fn ensure_positive(self) -> Result<Self, MoneyError> {
        if !self.is_positive() {
            return Err(MoneyError::NotPositive(self.0));
        }
        Ok(self)
    }

    /// Subtracts, clamping the result at zero
    ///
    /// This is the derivation primitive for `net_payable` and `balance_due`:
    /// the ledger never reports a negative balance, an overpayment simply
    /// clamps to zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        if other.0 >= self.0 {
            Money::zero()
        } else {
            Money::new(self.0 - other.0)
        }
    }

    /// Formats the amount with Indian digit grouping (12,34,567.89)
    pub fn grouped(&self) -> String {
        let rounded = self.0.round_dp(2);
        let negative = rounded.is_sign_negative();
        let abs = rounded.abs();

        let text = format!("{:.2}", abs);
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        // Indian grouping: rightmost group of three, then groups of two.
        let digits: Vec<char> = int_part.chars().collect();
        let mut grouped = String::new();
        let len = digits.len();
        for (i, ch) in digits.iter().enumerate() {
            grouped.push(*ch);
            let remaining = len - i - 1;
            if remaining == 0 {
                continue;
            }
            if remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0) {
                grouped.push(',');
            }
        }

        let sign = if negative { "-" } else { "" };
        format!("{}{}.{}", sign, grouped, frac_part)
    }

    /// Renders the amount for receipts: "Rupees 20,000.00 Only"
    ///
    /// Deterministic currency formatting, not spelled-out English words.
    pub fn in_words(&self) -> String {
        format!("Rupees {} Only", self.grouped())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.grouped())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
