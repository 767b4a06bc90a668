//! JSON import
//!
//! Accepts either a single-year export (`{year, data}`) or a multi-year
//! bundle (`{currentYear, years}`). Every year record is validated before
//! anything is merged, so a failed import leaves the ledger exactly as it
//! was.

use serde_json::Value;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, YearRecord};

use super::validate::validate_year;

/// Result of a completed import
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Year identifiers that were merged, in order
    pub imported_years: Vec<String>,
    /// The current year after the import
    pub current_year: String,
}

/// Recognized import payload shapes
enum ImportPayload {
    /// `{year, data}`: one year record
    SingleYear { year: String, data: Value },
    /// `{currentYear, years}`: a bundle of year records
    Bundle { current_year: String, years: serde_json::Map<String, Value> },
}

/// Detect the payload shape of an import file
fn parse_payload(text: &str) -> LedgerResult<ImportPayload> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| LedgerError::Import(format!("file is not valid JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| LedgerError::Import("file is not a JSON object".to_string()))?;

    if let (Some(year), Some(data)) = (
        object.get("year").and_then(Value::as_str),
        object.get("data"),
    ) {
        return Ok(ImportPayload::SingleYear {
            year: year.to_string(),
            data: data.clone(),
        });
    }

    if let (Some(current_year), Some(years)) = (
        object.get("currentYear").and_then(Value::as_str),
        object.get("years").and_then(Value::as_object),
    ) {
        return Ok(ImportPayload::Bundle {
            current_year: current_year.to_string(),
            years: years.clone(),
        });
    }

    Err(LedgerError::Import(
        "unrecognized file shape: expected {year, data} or {currentYear, years}".to_string(),
    ))
}

/// Validate an import payload and merge it into the ledger
///
/// All year records are validated up front; on any failure the ledger is
/// untouched. A single-year import selects the imported year. A bundle
/// overwrites matching year keys only and adopts the bundle's current
/// year when it resolves in the merged store, keeping the previous
/// selection otherwise.
///
/// Persistence is the caller's responsibility (see
/// [`super::ledger::LedgerService::import_str`]).
pub fn apply_import(ledger: &mut Ledger, text: &str) -> LedgerResult<ImportReport> {
    let payload = parse_payload(text)?;

    match payload {
        ImportPayload::SingleYear { year, data } => {
            let record = validate_record(&year, &data)?;
            ledger.merge_year(&year, record);
            ledger.set_current_year(&year);
            Ok(ImportReport {
                imported_years: vec![year],
                current_year: ledger.current_year().to_string(),
            })
        }
        ImportPayload::Bundle { current_year, years } => {
            if years.is_empty() {
                return Err(LedgerError::Import("bundle contains no years".to_string()));
            }

            let mut validated: Vec<(String, YearRecord)> = Vec::with_capacity(years.len());
            for (year, data) in &years {
                validated.push((year.clone(), validate_record(year, data)?));
            }

            let mut imported_years = Vec::with_capacity(validated.len());
            for (year, record) in validated {
                ledger.merge_year(&year, record);
                imported_years.push(year);
            }

            if ledger.contains_year(&current_year) {
                ledger.set_current_year(&current_year);
            }

            Ok(ImportReport {
                imported_years,
                current_year: ledger.current_year().to_string(),
            })
        }
    }
}

fn validate_record(year: &str, data: &Value) -> LedgerResult<YearRecord> {
    validate_year(data)
        .map_err(|e| LedgerError::Validation(format!("year {}: {}", year, e)))
}
