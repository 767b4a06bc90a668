//! Quarters of the ledger year
//!
//! A quarter is a fixed grouping of three consecutive months; there are
//! always exactly four per year.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::Month;

/// One of the four quarters of a year
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// All four quarters in order
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// One-based quarter number (1-4)
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Look up a quarter by its one-based number
    pub fn from_number(number: u8) -> Option<Quarter> {
        match number {
            1 => Some(Quarter::Q1),
            2 => Some(Quarter::Q2),
            3 => Some(Quarter::Q3),
            4 => Some(Quarter::Q4),
            _ => None,
        }
    }

    /// The three months that make up this quarter
    pub fn months(&self) -> [Month; 3] {
        let start = (*self as usize) * 3;
        [
            Month::ALL[start],
            Month::ALL[start + 1],
            Month::ALL[start + 2],
        ]
    }

    /// Display label for the month range, e.g. "JAN–MAR"
    pub fn month_range(&self) -> String {
        let months = self.months();
        format!("{}–{}", months[0], months[2])
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(Quarter::Q1.number(), 1);
        assert_eq!(Quarter::Q4.number(), 4);
        assert_eq!(Quarter::from_number(2), Some(Quarter::Q2));
        assert_eq!(Quarter::from_number(0), None);
        assert_eq!(Quarter::from_number(5), None);
    }

    #[test]
    fn test_months() {
        assert_eq!(
            Quarter::Q1.months(),
            [Month::Jan, Month::Feb, Month::Mar]
        );
        assert_eq!(
            Quarter::Q4.months(),
            [Month::Oct, Month::Nov, Month::Dec]
        );
    }

    #[test]
    fn test_every_month_covered_once() {
        let mut seen = Vec::new();
        for quarter in Quarter::ALL {
            seen.extend(quarter.months());
        }
        assert_eq!(seen, Month::ALL.to_vec());
    }

    #[test]
    fn test_display() {
        assert_eq!(Quarter::Q3.to_string(), "Q3");
        assert_eq!(Quarter::Q2.month_range(), "APR–JUN");
    }
}
