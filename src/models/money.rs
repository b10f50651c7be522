//! Money type for representing currency amounts
//!
//! Amounts are whole currency units (yen) stored as i64. There are no
//! fractional sub-units, so every percentage split is rounded back to an
//! integer with half-away-from-zero semantics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::display::currency::CurrencyFormat;

/// Integer division rounding ties away from zero. `denominator` must be positive.
pub(crate) fn round_div(numerator: i128, denominator: i128) -> i128 {
    debug_assert!(denominator > 0);
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.abs() * 2 >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

/// Clamp a wide intermediate back into `i64`
pub(crate) fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Represents a monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use kakeibo_plan::models::Money;
    /// let rent = Money::from_units(90_000);
    /// assert_eq!(rent.units(), 90_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// `percentage`% of this amount, rounded half away from zero
    ///
    /// # Examples
    /// ```
    /// use kakeibo_plan::models::Money;
    /// assert_eq!(Money::from_units(300_000).percent_of(15).units(), 45_000);
    /// assert_eq!(Money::from_units(10).percent_of(15).units(), 2);
    /// ```
    pub fn percent_of(&self, percentage: u32) -> Self {
        let scaled = round_div(i128::from(self.0) * i128::from(percentage), 100);
        Self(saturate(scaled))
    }

    /// Whole-number percentage that `self` represents of `whole`
    ///
    /// Returns `None` when `whole` is not positive. The result is not capped
    /// but saturates at the `i64` range.
    pub fn ratio_percent(&self, whole: Money) -> Option<i64> {
        if whole.0 <= 0 {
            return None;
        }
        Some(saturate(round_div(
            i128::from(self.0) * 100,
            i128::from(whole.0),
        )))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "300000", "300,000", "￥300,000", "¥-500", "-500"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest
            .strip_prefix('￥')
            .or_else(|| rest.strip_prefix('¥'))
            .unwrap_or(rest);

        // "¥-500" puts the sign after the symbol
        let (negative, rest) = match rest.strip_prefix('-') {
            Some(stripped) if !negative => (true, stripped),
            _ => (negative, rest),
        };

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let units: i64 = digits
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -units } else { units }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CurrencyFormat::default().format(*self))
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
