//! Calendar months
//!
//! The ledger always covers a full year of 12 fixed months, JAN through DEC,
//! grouped into four quarters of three months each.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::quarter::Quarter;

/// One of the 12 calendar months
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All 12 months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// The month's display label ("JAN".."DEC")
    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::May => "MAY",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AUG",
            Month::Sep => "SEP",
            Month::Oct => "OCT",
            Month::Nov => "NOV",
            Month::Dec => "DEC",
        }
    }

    /// Zero-based position in the year (JAN = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a month by its zero-based position
    pub fn from_index(index: usize) -> Option<Month> {
        Month::ALL.get(index).copied()
    }

    /// The quarter this month belongs to
    pub fn quarter(&self) -> Quarter {
        match self.index() / 3 {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// Look up a month by name, case-insensitive ("jan", "JAN")
    pub fn from_name(name: &str) -> Option<Month> {
        let upper = name.trim().to_uppercase();
        Month::ALL.iter().find(|m| m.as_str() == upper).copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
