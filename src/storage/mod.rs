//! Storage layer for taxledger
//!
//! Provides JSON file storage with atomic writes and one-shot migration
//! from the legacy single-year layout.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json_opt, write_json_atomic};
pub use ledger::LedgerRepository;
