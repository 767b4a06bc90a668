//! Quarter table and amount formatting
//!
//! Renders one quarter of a year record as a fixed-width text table:
//! a row per month, a column per category (filled slots joined with
//! commas), remarks on the right, and a totals row at the bottom.

use crate::models::{Category, Quarter, YearRecord};
use crate::services::totals::quarter_category_total;

/// Format an amount for display: thousands separators, at most two
/// decimal places, trailing zeros trimmed
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.abs();
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if frac != 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{:02}", frac));
        }
    }
    out
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render one quarter of a year record as a text table
pub fn format_quarter_table(
    year_id: &str,
    record: &YearRecord,
    quarter: Quarter,
    currency_symbol: &str,
) -> String {
    let months = quarter.months();

    let mut headers: Vec<String> = vec!["#".to_string(), "MONTH".to_string()];
    headers.extend(Category::ALL.iter().map(|c| c.to_string()));
    headers.push("REMARKS".to_string());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (i, month) in months.iter().enumerate() {
        let mut row = vec![(i + 1).to_string(), month.to_string()];
        for category in Category::ALL {
            let filled: Vec<String> = record
                .slots(*month, category)
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect();
            row.push(filled.join(", "));
        }
        row.push(record.month(*month).remarks.clone());
        rows.push(row);
    }

    let mut totals = vec![String::new(), "TOTALS".to_string()];
    for category in Category::ALL {
        let total = quarter_category_total(record, quarter, category);
        totals.push(format!("{} {}", currency_symbol, format_amount(total)));
    }
    totals.push("-".to_string());
    rows.push(totals);

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} • {}\n\n",
        quarter,
        year_id,
        quarter.month_range()
    ));
    out.push_str(&format_row(&headers, &widths));
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_row(&separator, &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths[i].saturating_sub(cell.chars().count());
        if i < cells.len() - 1 {
            line.push_str(&" ".repeat(pad));
        }
    }
    line.push('\n');
    line
}
