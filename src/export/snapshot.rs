//! Quarter snapshots and year exports
//!
//! Snapshots are derived, immutable payloads: they are generated from the
//! ledger at call time, stamped with the generation instant, and never
//! read back into the store. Numeric coercion happens here and only here;
//! the store itself keeps raw strings.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Month, Quarter, YearRecord, SLOTS_PER_CATEGORY};
use crate::services::totals::{parse_amount, quarter_category_total};

/// One slot in a snapshot: an empty slot stays empty, everything else is
/// coerced to a number (malformed text normalizes to 0, consistent with
/// the totals next to it)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapshotCell {
    Blank,
    Amount(f64),
}

impl SnapshotCell {
    /// Coerce a raw slot value
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            SnapshotCell::Blank
        } else {
            SnapshotCell::Amount(parse_amount(raw))
        }
    }

    /// Numeric value of the cell (blank counts as zero)
    pub fn value(&self) -> f64 {
        match self {
            SnapshotCell::Blank => 0.0,
            SnapshotCell::Amount(n) => *n,
        }
    }
}

impl Serialize for SnapshotCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SnapshotCell::Blank => serializer.serialize_str(""),
            SnapshotCell::Amount(n) => serializer.serialize_f64(*n),
        }
    }
}

/// One month inside a quarter snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotMonth {
    pub month: Month,
    pub remarks: String,
    pub categories: BTreeMap<Category, [SnapshotCell; SLOTS_PER_CATEGORY]>,
}

/// A read-only export of one quarter plus its computed totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterSnapshot {
    pub year: String,
    /// One-based quarter number (1-4)
    pub quarter: u8,
    pub months: Vec<SnapshotMonth>,
    pub quarter_totals: BTreeMap<Category, f64>,
    pub generated_at: DateTime<Utc>,
}

impl QuarterSnapshot {
    /// Build a snapshot of one quarter of a year record
    pub fn build(year_id: &str, record: &YearRecord, quarter: Quarter) -> Self {
        let months = quarter
            .months()
            .iter()
            .map(|month| {
                let source = record.month(*month);
                SnapshotMonth {
                    month: *month,
                    remarks: source.remarks.clone(),
                    categories: Category::ALL
                        .iter()
                        .map(|category| {
                            let row = source.slots(*category);
                            let cells: [SnapshotCell; SLOTS_PER_CATEGORY] =
                                std::array::from_fn(|i| SnapshotCell::from_raw(&row[i]));
                            (*category, cells)
                        })
                        .collect(),
                }
            })
            .collect();

        let quarter_totals = Category::ALL
            .iter()
            .map(|c| (*c, quarter_category_total(record, quarter, *c)))
            .collect();

        Self {
            year: year_id.to_string(),
            quarter: quarter.number(),
            months,
            quarter_totals,
            generated_at: Utc::now(),
        }
    }

    /// Default export file name, e.g. `tax-quarter-1.json`
    pub fn default_file_name(&self) -> String {
        format!("tax-quarter-{}.json", self.quarter)
    }
}

/// A full-year export; slot strings are passed through uncoerced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearExport {
    pub year: String,
    pub data: YearRecord,
    pub exported_at: DateTime<Utc>,
}

impl YearExport {
    /// Build a full-year export of a year record
    pub fn build(year_id: &str, record: &YearRecord) -> Self {
        Self {
            year: year_id.to_string(),
            data: record.clone(),
            exported_at: Utc::now(),
        }
    }

    /// Default export file name, e.g. `tax-year-2026.json`
    pub fn default_file_name(&self) -> String {
        format!("tax-year-{}.json", self.year)
    }
}

/// Write an export payload as JSON
pub fn write_export<T: Serialize, W: Write>(
    payload: &T,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, payload)
    } else {
        serde_json::to_writer(writer, payload)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
