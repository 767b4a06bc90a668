//! Core data models for taxledger
//!
//! This module contains the fixed vocabulary of the ledger (months, quarters,
//! categories) and the data structures that hold entries: month records, year
//! records, and the multi-year ledger itself.

pub mod category;
pub mod ledger;
pub mod month;
pub mod quarter;
pub mod year;

pub use category::Category;
pub use ledger::Ledger;
pub use month::Month;
pub use quarter::Quarter;
pub use year::{MonthRecord, YearRecord, SLOTS_PER_CATEGORY};
