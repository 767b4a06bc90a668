//! Derived totals
//!
//! Pure functions computing month, quarter, and annual sums from a year
//! record. Slot values stay raw strings in the store; this module is the
//! only place that interprets them numerically, and it does so fresh on
//! every call. At 12 months x 8 categories x 7 slots there is nothing to
//! cache.

use crate::models::{Category, Month, Quarter, YearRecord};

/// Interpret a raw slot value as an amount
///
/// Empty and malformed values count as zero; the result is always finite.
/// Malformed input is deliberate leniency, not an error: the store keeps
/// whatever the user typed, and it simply doesn't contribute to totals.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Sum of the 7 slots for one (month, category) pair
pub fn month_category_total(record: &YearRecord, month: Month, category: Category) -> f64 {
    record
        .slots(month, category)
        .iter()
        .map(|s| parse_amount(s))
        .sum()
}

/// Sum of a category over a quarter's three months
pub fn quarter_category_total(record: &YearRecord, quarter: Quarter, category: Category) -> f64 {
    quarter
        .months()
        .iter()
        .map(|m| month_category_total(record, *m, category))
        .sum()
}

/// Sum over all categories for a quarter
pub fn quarter_grand_total(record: &YearRecord, quarter: Quarter) -> f64 {
    Category::ALL
        .iter()
        .map(|c| quarter_category_total(record, quarter, *c))
        .sum()
}

/// Sum over all 12 months and all categories
pub fn annual_grand_total(record: &YearRecord) -> f64 {
    let mut total = 0.0;
    for month in Month::ALL {
        for category in Category::ALL {
            total += month_category_total(record, month, category);
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_is_total() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("-3.25"), -3.25);
        assert_eq!(parse_amount("garbage"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert!(parse_amount("1e308").is_finite());
    }

    #[test]
    fn test_empty_year_totals_are_zero() {
        let record = YearRecord::empty();
        for month in Month::ALL {
            for category in Category::ALL {
                assert_eq!(month_category_total(&record, month, category), 0.0);
            }
        }
        for quarter in Quarter::ALL {
            assert_eq!(quarter_grand_total(&record, quarter), 0.0);
        }
        assert_eq!(annual_grand_total(&record), 0.0);
    }

    #[test]
    fn test_scenario_jan_ddv_in() {
        let mut record = YearRecord::empty();
        let row = record
            .month_mut(Month::Jan)
            .categories
            .get_mut(&Category::DdvIn)
            .unwrap();
        row[0] = "100".to_string();
        row[2] = "50".to_string();

        assert_eq!(month_category_total(&record, Month::Jan, Category::DdvIn), 150.0);
        assert_eq!(
            quarter_category_total(&record, Quarter::Q1, Category::DdvIn),
            150.0
        );
        assert_eq!(annual_grand_total(&record), 150.0);
    }

    #[test]
    fn test_malformed_slots_count_as_zero() {
        let mut record = YearRecord::empty();
        let row = record
            .month_mut(Month::Jul)
            .categories
            .get_mut(&Category::Others)
            .unwrap();
        row[0] = "25".to_string();
        row[1] = "oops".to_string();

        assert_eq!(
            month_category_total(&record, Month::Jul, Category::Others),
            25.0
        );
    }

    #[test]
    fn test_annual_equals_sum_of_quarters() {
        let mut record = YearRecord::empty();
        // Scatter values across months, categories, and slots
        for (i, month) in Month::ALL.iter().enumerate() {
            let category = Category::ALL[i % Category::ALL.len()];
            let row = record
                .month_mut(*month)
                .categories
                .get_mut(&category)
                .unwrap();
            row[i % 7] = format!("{}", (i + 1) * 10);
        }

        let quarters_sum: f64 = Quarter::ALL
            .iter()
            .map(|q| quarter_grand_total(&record, *q))
            .sum();
        assert_eq!(annual_grand_total(&record), quarters_sum);
    }
}
