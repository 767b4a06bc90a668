//! Import validation
//!
//! Gatekeeper for year records entering the ledger from an untrusted
//! source. Checks the fixed 12-month / 8-category / 7-slot shape and
//! reports the first violation found; cell content is not type-checked,
//! since numeric interpretation stays lazy.

use serde_json::Value;
use std::fmt;

use crate::models::{Category, Month, MonthRecord, YearRecord, SLOTS_PER_CATEGORY};

/// First structural violation found in a candidate year payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NotAnObject,
    MissingMonths,
    WrongMonthCount(usize),
    MissingCategories { month: Month },
    MissingCategory { month: Month, category: Category },
    NotASlotList { month: Month, category: Category },
    WrongSlotCount { month: Month, category: Category, len: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "year payload is not an object"),
            Self::MissingMonths => write!(f, "missing 'months' list"),
            Self::WrongMonthCount(len) => {
                write!(f, "expected 12 months, found {}", len)
            }
            Self::MissingCategories { month } => {
                write!(f, "month {} has no 'categories' mapping", month)
            }
            Self::MissingCategory { month, category } => {
                write!(f, "month {} is missing category '{}'", month, category)
            }
            Self::NotASlotList { month, category } => {
                write!(
                    f,
                    "month {} category '{}' is not a list of slots",
                    month, category
                )
            }
            Self::WrongSlotCount { month, category, len } => {
                write!(
                    f,
                    "month {} category '{}' has {} slots, expected {}",
                    month, category, len, SLOTS_PER_CATEGORY
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate an untrusted year payload and convert it into a [`YearRecord`]
///
/// Any violation rejects the whole candidate; the input is never mutated.
pub fn validate_year(candidate: &Value) -> Result<YearRecord, ValidationError> {
    let object = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    let months = object
        .get("months")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingMonths)?;

    if months.len() != Month::ALL.len() {
        return Err(ValidationError::WrongMonthCount(months.len()));
    }

    let mut records = Vec::with_capacity(Month::ALL.len());

    for (month, entry) in Month::ALL.iter().zip(months) {
        let categories = entry
            .get("categories")
            .and_then(Value::as_object)
            .ok_or(ValidationError::MissingCategories { month: *month })?;

        let mut record = MonthRecord::empty();
        record.remarks = entry
            .get("remarks")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        for category in Category::ALL {
            let slots = categories
                .get(category.as_str())
                .ok_or(ValidationError::MissingCategory {
                    month: *month,
                    category,
                })?;

            let slots = slots.as_array().ok_or(ValidationError::NotASlotList {
                month: *month,
                category,
            })?;

            if slots.len() != SLOTS_PER_CATEGORY {
                return Err(ValidationError::WrongSlotCount {
                    month: *month,
                    category,
                    len: slots.len(),
                });
            }

            let row = record
                .categories
                .get_mut(&category)
                .expect("empty month record carries every category");
            for (slot, value) in row.iter_mut().zip(slots) {
                *slot = slot_text(value);
            }
        }

        records.push(record);
    }

    let months: [MonthRecord; 12] = records
        .try_into()
        .expect("exactly 12 months checked above");
    Ok(YearRecord { months })
}

/// Cell content passes through uninterpreted: strings stay as typed,
/// null is an empty slot, anything else keeps its JSON text so numbers
/// keep their numeric meaning at aggregation time.
fn slot_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
