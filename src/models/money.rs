//! Money type for representing currency amounts
//!
//! Internally stores amounts in satang (hundredths of a baht, i64) to avoid
//! floating-point precision issues. Provides safe arithmetic operations and
//! formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as satang (hundredths of the currency unit)
///
/// Using i64 subunits avoids floating-point precision issues and supports
/// amounts far beyond anything a personal ledger will see (both positive
/// and negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from satang
    ///
    /// # Examples
    /// ```
    /// use satang::models::Money;
    /// let amount = Money::from_satang(1050); // ฿10.50
    /// ```
    pub const fn from_satang(satang: i64) -> Self {
        Self(satang)
    }

    /// Create a Money amount from whole baht
    ///
    /// # Examples
    /// ```
    /// use satang::models::Money;
    /// let amount = Money::from_baht(50); // ฿50.00
    /// ```
    pub const fn from_baht(baht: i64) -> Self {
        Self(baht * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in satang
    pub const fn satang(&self) -> i64 {
        self.0
    }

    /// Get the whole baht portion (truncated toward zero)
    pub const fn baht(&self) -> i64 {
        self.0 / 100
    }

    /// Get the satang portion (0-99)
    pub const fn satang_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp a negative amount to zero
    pub const fn max_zero(&self) -> Self {
        if self.0 < 0 {
            Self(0)
        } else {
            *self
        }
    }

    /// Return the smaller of two amounts
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "฿10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('฿').or_else(|| s.strip_prefix('$')).unwrap_or(s);

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        // Parse based on format
        let satang = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let baht: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fractional part to 2 digits
            let frac = parts[1];
            let satang: i64 = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            baht * 100 + satang
        } else {
            // Integer format - whole baht
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -satang } else { satang }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.baht().abs(), self.satang_part())
        } else {
            format!("{}{}.{:02}", symbol, self.baht(), self.satang_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-฿{}.{:02}", self.baht().abs(), self.satang_part())
        } else {
            write!(f, "฿{}.{:02}", self.baht(), self.satang_part())
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_satang() {
        let m = Money::from_satang(1050);
        assert_eq!(m.satang(), 1050);
        assert_eq!(m.baht(), 10);
        assert_eq!(m.satang_part(), 50);
    }

    #[test]
    fn test_from_baht() {
        let m = Money::from_baht(10);
        assert_eq!(m.satang(), 1000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_satang(1050)), "฿10.50");
        assert_eq!(format!("{}", Money::from_satang(0)), "฿0.00");
        assert_eq!(format!("{}", Money::from_satang(-1050)), "-฿10.50");
        assert_eq!(format!("{}", Money::from_satang(5)), "฿0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_satang(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_satang(-1050).format_with_symbol("฿"), "-฿10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_satang(1000);
        let b = Money::from_satang(500);

        assert_eq!((a + b).satang(), 1500);
        assert_eq!((a - b).satang(), 500);
        assert_eq!((-a).satang(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().satang(), 1050);
        assert_eq!(Money::parse("฿10.50").unwrap().satang(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().satang(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().satang(), -1050);
        assert_eq!(Money::parse("10").unwrap().satang(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().satang(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().satang(), 5);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_min_and_max_zero() {
        let a = Money::from_satang(1000);
        let b = Money::from_satang(500);

        assert_eq!(a.min(b), b);
        assert_eq!(Money::from_satang(-5).max_zero(), Money::zero());
        assert_eq!(a.max_zero(), a);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_satang(100),
            Money::from_satang(200),
            Money::from_satang(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.satang(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_satang(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
