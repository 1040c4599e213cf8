//! Exact money amounts in minor currency units.
//!
//! Page seeds deliver prices as decimal numbers (`12.5`) or decimal strings
//! (`"12.50"`). They are converted once at the boundary so totals are exact
//! sums of integers.

use core::iter::Sum;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// A non-negative amount in minor units (pence, cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub fn minor(&self) -> u64 {
        self.0
    }

    /// Convert a decimal major-unit amount, rounding to the nearest minor unit.
    ///
    /// Amounts whose minor-unit value does not fit in a `u64` are rejected.
    pub fn from_major(major: f64) -> Result<Self, DomainError> {
        if !major.is_finite() || major < 0.0 {
            return Err(DomainError::validation(format!("invalid price: {major}")));
        }
        let minor = (major * 100.0).round();
        // `u64::MAX as f64` rounds up to 2^64, the first value that no longer fits.
        if minor >= u64::MAX as f64 {
            return Err(DomainError::validation(format!("price out of range: {major}")));
        }
        Ok(Self(minor as u64))
    }

    /// Price of `quantity` units.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Deserialize a major-unit amount given either as a JSON number or string.
    pub fn deserialize_major<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Money::from_major(n).map_err(serde::de::Error::custom),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses `"9.99"`, `"10"`, `"0.5"`; at most two fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("invalid price: {s:?}"));
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() || frac.len() > 2 {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(frac))
            .map(Money)
            .ok_or_else(invalid)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}
