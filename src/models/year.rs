//! Month and year records
//!
//! A year record is the unit of storage and import: exactly 12 month
//! records, each holding a free-text remarks field and 7 entry slots for
//! every category. Slot values stay raw strings; numeric interpretation
//! happens at aggregation time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::month::Month;

/// Number of entry slots per (month, category) pair
pub const SLOTS_PER_CATEGORY: usize = 7;

/// A fixed row of entry slots for one category in one month
pub type SlotRow = [String; SLOTS_PER_CATEGORY];

/// One month's entries: free-text remarks plus a slot row per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Free-form notes for the month
    #[serde(default)]
    pub remarks: String,

    /// Entry slots keyed by category label
    pub categories: BTreeMap<Category, SlotRow>,
}

impl MonthRecord {
    /// Create a month record with all slots empty
    pub fn empty() -> Self {
        Self {
            remarks: String::new(),
            categories: Category::ALL
                .iter()
                .map(|c| (*c, SlotRow::default()))
                .collect(),
        }
    }

    /// Slot row for a category
    ///
    /// Every record constructed by this crate carries all 8 categories;
    /// externally sourced records are normalized on load.
    pub fn slots(&self, category: Category) -> &SlotRow {
        &self.categories[&category]
    }

    /// Fill in any category rows missing from an externally sourced record
    pub fn normalize(&mut self) {
        for category in Category::ALL {
            self.categories.entry(category).or_default();
        }
    }
}

impl Default for MonthRecord {
    fn default() -> Self {
        Self::empty()
    }
}

/// One full year of entries: exactly 12 month records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Month records in calendar order, JAN first
    pub months: [MonthRecord; 12],
}

impl YearRecord {
    /// Create a year record with every slot and remark empty
    pub fn empty() -> Self {
        Self {
            months: std::array::from_fn(|_| MonthRecord::empty()),
        }
    }

    /// The record for a month
    pub fn month(&self, month: Month) -> &MonthRecord {
        &self.months[month.index()]
    }

    /// Mutable record for a month
    pub fn month_mut(&mut self, month: Month) -> &mut MonthRecord {
        &mut self.months[month.index()]
    }

    /// Slot row for a (month, category) pair
    pub fn slots(&self, month: Month, category: Category) -> &SlotRow {
        self.month(month).slots(category)
    }

    /// Fill in category rows missing from an externally sourced record
    pub fn normalize(&mut self) {
        for record in &mut self.months {
            record.normalize();
        }
    }
}

impl Default for YearRecord {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shape() {
        let year = YearRecord::empty();
        assert_eq!(year.months.len(), 12);
        for record in &year.months {
            assert!(record.remarks.is_empty());
            assert_eq!(record.categories.len(), 8);
            for row in record.categories.values() {
                assert_eq!(row.len(), SLOTS_PER_CATEGORY);
                assert!(row.iter().all(|s| s.is_empty()));
            }
        }
    }

    #[test]
    fn test_month_access() {
        let mut year = YearRecord::empty();
        year.month_mut(Month::Mar).remarks = "note".to_string();
        assert_eq!(year.month(Month::Mar).remarks, "note");
        assert_eq!(year.month(Month::Feb).remarks, "");
    }

    #[test]
    fn test_normalize_fills_missing_categories() {
        let mut record = MonthRecord::empty();
        record.categories.remove(&Category::Ngh);
        assert_eq!(record.categories.len(), 7);

        record.normalize();
        assert_eq!(record.categories.len(), 8);
        assert!(record.slots(Category::Ngh).iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut year = YearRecord::empty();
        year.month_mut(Month::Jan).categories.get_mut(&Category::DdvIn).unwrap()[0] =
            "100".to_string();
        year.month_mut(Month::Jan).remarks = "first entries".to_string();

        let json = serde_json::to_string(&year).unwrap();
        let back: YearRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(year, back);
    }

    #[test]
    fn test_category_keys_serialize_as_labels() {
        let year = YearRecord::empty();
        let value = serde_json::to_value(&year).unwrap();
        let categories = &value["months"][0]["categories"];
        assert!(categories.get("DDV IN").is_some());
        assert!(categories.get("PROJECTS").is_some());
        assert_eq!(categories["NGH"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_wrong_slot_count_rejected_by_serde() {
        let mut value = serde_json::to_value(YearRecord::empty()).unwrap();
        value["months"][0]["categories"]["NGH"] = serde_json::json!(["1", "2"]);
        assert!(serde_json::from_value::<YearRecord>(value).is_err());
    }
}
