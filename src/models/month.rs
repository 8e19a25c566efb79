//! Calendar month period
//!
//! The dashboard aggregates by calendar month. A `Month` is the (year, month)
//! pair behind every period label ("June 2021"), dropdown entry, and timeline
//! point.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, the dashboard's only period granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Month {
    /// Calendar year
    pub year: i32,
    /// Month number, 1-12
    pub month: u32,
}

impl Month {
    /// Create a month from a year and a 1-12 month number
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current calendar month
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// First day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.clamp(1, 12), 1).unwrap_or_default()
    }

    /// Last day of this month
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// Number of days in this month
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Full month name ("June")
    pub fn name(&self) -> String {
        self.first_day().format("%B").to_string()
    }

    /// Dashboard period label ("June 2021")
    pub fn label(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }

    /// Parse a "Month Year" period label
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (name, year) = s
            .rsplit_once(' ')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let month: chrono::Month = name
            .trim()
            .parse()
            .map_err(|_| MonthParseError::InvalidMonthName(name.to_string()))?;
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Ok(Self {
            year,
            month: month.number_from_month(),
        })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error type for period-label parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonthName(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid period label: {}", s),
            MonthParseError::InvalidMonthName(s) => write!(f, "Invalid month name: {}", s),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(Month::new(2021, 6).label(), "June 2021");
        assert_eq!(Month::new(2020, 12).label(), "December 2020");
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(Month::parse("June 2021").unwrap(), Month::new(2021, 6));
        assert_eq!(Month::parse(" December 2020 ").unwrap(), Month::new(2020, 12));
        assert!(Month::parse("Juneteenth 2021").is_err());
        assert!(Month::parse("June").is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(Month::new(2021, 6).days_in_month(), 30);
        assert_eq!(Month::new(2021, 1).days_in_month(), 31);
        assert_eq!(Month::new(2020, 2).days_in_month(), 29);
        assert_eq!(Month::new(2021, 2).days_in_month(), 28);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(Month::new(2020, 12).next(), Month::new(2021, 1));
        assert_eq!(Month::new(2021, 6).next(), Month::new(2021, 7));
    }

    #[test]
    fn test_contains() {
        let june = Month::new(2021, 6);
        assert!(june.contains(NaiveDate::from_ymd_opt(2021, 6, 15).unwrap()));
        assert!(!june.contains(NaiveDate::from_ymd_opt(2021, 7, 1).unwrap()));
        assert!(!june.contains(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()));
    }

    #[test]
    fn test_ordering() {
        assert!(Month::new(2020, 12) < Month::new(2021, 1));
        assert!(Month::new(2021, 5) < Month::new(2021, 6));
    }
}
