//! Import command
//!
//! Reads a JSON export or multi-year bundle from disk and merges it into
//! the ledger. Validation failures leave the ledger untouched.

use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::services::LedgerService;

/// Handle `taxledger import <FILE>`
pub fn handle_import_command(service: &mut LedgerService, file: &Path) -> LedgerResult<()> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| LedgerError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let report = service.import_str(&text)?;

    println!("Imported years: {}", report.imported_years.join(", "));
    println!("Current year: {}", report.current_year);

    Ok(())
}
