//! Fixed-point currency amount with 2 decimal places.
//!
//! ABA money columns hold whole cents. Keeping amounts as scaled decimals
//! means batch totals compare exactly, without floating-point drift.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A currency amount that always carries exactly 2 decimal places.
///
/// # Examples
///
/// ```
/// use aba_parser::Money;
///
/// let amount = Money::from_cents(1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates an amount from an integer number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, Self::SCALE))
    }

    /// Creates an amount from whole currency units.
    pub fn from_units(units: i64) -> Self {
        Self::new(Decimal::from(units))
    }

    /// Creates an amount from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Returns `true` if this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money::new)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
