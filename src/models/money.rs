//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Ledger prices parse straight into cents, so sums are exact and the
//! "round to 2 decimals after summation" rule holds by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use findash::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a major-unit float (e.g. a settings value)
    ///
    /// Rounds to the nearest cent.
    pub fn from_major(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole currency-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Integer-truncated percentage of a ceiling: `100 × self / ceiling`
    ///
    /// Zero-ceiling policy: zero spend against a zero ceiling is 0%; any
    /// spend against a zero ceiling is reported as 100% (and classified as
    /// over budget by the pacing layer).
    pub fn percent_of(&self, ceiling: Money) -> u32 {
        if ceiling.is_zero() {
            if self.is_zero() {
                0
            } else {
                100
            }
        } else {
            (100 * self.0 / ceiling.0).max(0) as u32
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = if let Some((units_str, cents_str)) = s.split_once('.') {
            let units: i64 = units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fractional part to 2 digits
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                // get() rather than a slice: a multi-byte character in the
                // fraction must parse-error, not panic on a char boundary.
                _ => cents_str
                    .get(..2)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units * 100 + cents
        } else {
            // Integer format - whole currency units
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
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
        write!(f, "{}", self.format_with_symbol("$"))
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
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(550.0).cents(), 55000);
        assert_eq!(Money::from_major(10.505).cents(), 1051);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("£"), "£10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("ten").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_parse_non_ascii_fraction_is_an_error() {
        // Multi-byte characters in the fraction must error, never panic.
        assert!(Money::parse("1.€").is_err());
        assert!(Money::parse("1.5€").is_err());
        assert!(Money::parse("10.五十").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_percent_of_truncates() {
        let budget = Money::from_major(550.0);
        // 100 * 367.89 / 550 = 66.889..., truncated to 66
        assert_eq!(Money::from_cents(36789).percent_of(budget), 66);
        assert_eq!(Money::from_major(550.0).percent_of(budget), 100);
        assert_eq!(Money::from_major(1100.0).percent_of(budget), 200);
    }

    #[test]
    fn test_percent_of_zero_ceiling() {
        assert_eq!(Money::zero().percent_of(Money::zero()), 0);
        assert_eq!(Money::from_cents(1).percent_of(Money::zero()), 100);
        assert_eq!(Money::from_major(999.0).percent_of(Money::zero()), 100);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }
}
