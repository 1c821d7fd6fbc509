use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount stored as hundredths of the unit (cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub fn from_units(units: i64) -> Self {
        return Self(units * 100);
    }

    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = digits.split('.');

        let units = parts.next().unwrap_or_default();
        let cents = parts.next();

        if parts.next().is_some() {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        if units.is_empty() && cents.map(str::is_empty).unwrap_or(true) {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units) || !cents.map(all_digits).unwrap_or(true) {
            Err(MoneyError::Parse("Invalid digit", string.to_string()))?
        }

        let cents = match cents {
            None => "00".to_string(),
            Some(cents) if cents.len() > 2 => {
                Err(MoneyError::Parse("More than two decimal places", string.to_string()))?
            }
            Some(cents) => format!("{:0<2}", cents),
        };

        let out_of_range = || MoneyError::Parse("Value out of range", string.to_string());

        let units: i64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| out_of_range())?
        };
        let cents: i64 = cents.parse()?;

        let value = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(out_of_range)?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn is_negative(&self) -> bool {
        return self.0 < 0;
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let total = self
            .0
            .checked_add(other.0)
            .ok_or_else(|| MoneyError::Overflow("add", *self, *other))?;

        return Ok(Money(total));
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let total = self
            .0
            .checked_sub(other.0)
            .ok_or_else(|| MoneyError::Underflow("sub", *self, *other))?;

        return Ok(Money(total));
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();

        return write!(f, "{sign}{}.{:02}", abs / 100, abs % 100);
    }
}
