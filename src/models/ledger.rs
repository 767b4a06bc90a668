//! The multi-year ledger
//!
//! The `Ledger` is the canonical in-memory store: every year's record keyed
//! by year identifier, plus the identifier of the currently selected year.
//! Invariant: `current_year` always has an entry in `years`. Construction
//! and every mutation uphold it; externally sourced ledgers are normalized
//! on load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::month::Month;
use super::year::YearRecord;

/// The full multi-year store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    current_year: String,
    years: BTreeMap<String, YearRecord>,
}

impl Ledger {
    /// Create a ledger with a single empty record for the given year
    pub fn new(current_year: impl Into<String>) -> Self {
        let current_year = current_year.into();
        let mut years = BTreeMap::new();
        years.insert(current_year.clone(), YearRecord::empty());
        Self {
            current_year,
            years,
        }
    }

    /// The currently selected year identifier
    pub fn current_year(&self) -> &str {
        &self.current_year
    }

    /// The record for the currently selected year
    pub fn current_record(&self) -> &YearRecord {
        self.years
            .get(&self.current_year)
            .expect("ledger invariant: current year always has a record")
    }

    /// All known year identifiers, sorted
    pub fn year_ids(&self) -> Vec<&str> {
        self.years.keys().map(String::as_str).collect()
    }

    /// Whether a year has a record
    pub fn contains_year(&self, year_id: &str) -> bool {
        self.years.contains_key(year_id)
    }

    /// The record for a year, if present
    pub fn year(&self, year_id: &str) -> Option<&YearRecord> {
        self.years.get(year_id)
    }

    /// The record for a year, creating an empty one if absent (idempotent)
    pub fn ensure_year(&mut self, year_id: &str) -> &mut YearRecord {
        self.years
            .entry(year_id.to_string())
            .or_insert_with(YearRecord::empty)
    }

    /// Select a year, creating its record first if needed
    pub fn set_current_year(&mut self, year_id: &str) {
        self.ensure_year(year_id);
        self.current_year = year_id.to_string();
    }

    /// Store a raw slot value (trimmed), creating the year if needed
    ///
    /// The value is kept verbatim; it is not coerced to a number here, so
    /// partially typed or malformed input is never lost. `slot` must be
    /// below [`super::year::SLOTS_PER_CATEGORY`]; the collaborator is
    /// responsible for emitting valid coordinates.
    pub fn set_slot(
        &mut self,
        year_id: &str,
        month: Month,
        category: Category,
        slot: usize,
        raw: &str,
    ) {
        let record = self.ensure_year(year_id);
        let row = record
            .month_mut(month)
            .categories
            .entry(category)
            .or_default();
        row[slot] = raw.trim().to_string();
    }

    /// A single slot value, if the year exists
    pub fn slot(&self, year_id: &str, month: Month, category: Category, slot: usize) -> Option<&str> {
        self.years
            .get(year_id)
            .map(|record| record.slots(month, category)[slot].as_str())
    }

    /// Store month remarks verbatim, creating the year if needed
    pub fn set_remarks(&mut self, year_id: &str, month: Month, text: &str) {
        self.ensure_year(year_id).month_mut(month).remarks = text.to_string();
    }

    /// A month's remarks, if the year exists
    pub fn remarks(&self, year_id: &str, month: Month) -> Option<&str> {
        self.years
            .get(year_id)
            .map(|record| record.month(month).remarks.as_str())
    }

    /// Replace a year's record wholesale (used by import)
    pub fn merge_year(&mut self, year_id: &str, record: YearRecord) {
        self.years.insert(year_id.to_string(), record);
    }

    /// Restore the shape invariants of an externally sourced ledger:
    /// every month record carries all categories, and `current_year`
    /// resolves to a record.
    pub fn normalize(&mut self) {
        for record in self.years.values_mut() {
            record.normalize();
        }
        let current = self.current_year.clone();
        self.ensure_year(&current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_current_record() {
        let ledger = Ledger::new("2026");
        assert_eq!(ledger.current_year(), "2026");
        assert!(ledger.contains_year("2026"));
        assert_eq!(ledger.year_ids(), vec!["2026"]);
        assert_eq!(ledger.current_record(), &YearRecord::empty());
    }

    #[test]
    fn test_ensure_year_is_idempotent() {
        let mut ledger = Ledger::new("2026");
        ledger.ensure_year("2027");
        ledger
            .ensure_year("2027")
            .month_mut(Month::Jan)
            .remarks = "kept".to_string();
        ledger.ensure_year("2027");
        assert_eq!(ledger.remarks("2027", Month::Jan), Some("kept"));
    }

    #[test]
    fn test_set_current_year_creates_record() {
        let mut ledger = Ledger::new("2026");
        ledger.set_current_year("2030");
        assert_eq!(ledger.current_year(), "2030");
        assert!(ledger.contains_year("2030"));
        assert!(ledger.contains_year("2026"));
    }

    #[test]
    fn test_set_slot_trims_and_preserves_raw() {
        let mut ledger = Ledger::new("2026");
        ledger.set_slot("2026", Month::Jan, Category::DdvIn, 0, "  100.50 ");
        ledger.set_slot("2026", Month::Jan, Category::DdvIn, 1, "not a number");

        assert_eq!(
            ledger.slot("2026", Month::Jan, Category::DdvIn, 0),
            Some("100.50")
        );
        assert_eq!(
            ledger.slot("2026", Month::Jan, Category::DdvIn, 1),
            Some("not a number")
        );
        assert_eq!(ledger.slot("2025", Month::Jan, Category::DdvIn, 0), None);
    }

    #[test]
    fn test_merge_year_replaces_wholesale() {
        let mut ledger = Ledger::new("2026");
        ledger.set_slot("2026", Month::Feb, Category::Ngh, 2, "42");

        ledger.merge_year("2026", YearRecord::empty());
        assert_eq!(ledger.slot("2026", Month::Feb, Category::Ngh, 2), Some(""));
    }

    #[test]
    fn test_normalize_restores_current_year() {
        let json = r#"{"currentYear":"2031","years":{}}"#;
        let mut ledger: Ledger = serde_json::from_str(json).unwrap();
        assert!(!ledger.contains_year("2031"));

        ledger.normalize();
        assert!(ledger.contains_year("2031"));
        assert_eq!(ledger.current_record(), &YearRecord::empty());
    }

    #[test]
    fn test_wire_field_names() {
        let ledger = Ledger::new("2026");
        let value = serde_json::to_value(&ledger).unwrap();
        assert!(value.get("currentYear").is_some());
        assert!(value.get("years").is_some());
        assert!(value["years"]["2026"]["months"].is_array());
    }
}
