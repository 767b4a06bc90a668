//! Display formatting for taxledger
//!
//! Formats quarter tables and amounts for terminal output.

pub mod table;

pub use table::{format_amount, format_quarter_table};
