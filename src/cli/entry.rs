//! Entry editing commands
//!
//! Parses user-facing coordinates (month name, category label, 1-based
//! slot number) into core types before touching the ledger; the core
//! expects valid coordinates.

use crate::config::settings::Settings;
use crate::display::format_amount;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Month, SLOTS_PER_CATEGORY};
use crate::services::totals::month_category_total;
use crate::services::LedgerService;

/// Parse a month argument
pub(crate) fn parse_month(arg: &str) -> LedgerResult<Month> {
    Month::from_name(arg).ok_or_else(|| {
        LedgerError::Validation(format!("Unknown month '{}' (use JAN..DEC)", arg))
    })
}

/// Parse a category argument
pub(crate) fn parse_category(arg: &str) -> LedgerResult<Category> {
    Category::from_label(arg).ok_or_else(|| {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        LedgerError::Validation(format!(
            "Unknown category '{}' (one of: {})",
            arg,
            labels.join(", ")
        ))
    })
}

/// Parse a 1-based slot number into a slot index
fn parse_slot(slot: usize) -> LedgerResult<usize> {
    if (1..=SLOTS_PER_CATEGORY).contains(&slot) {
        Ok(slot - 1)
    } else {
        Err(LedgerError::Validation(format!(
            "Slot must be between 1 and {}, got {}",
            SLOTS_PER_CATEGORY, slot
        )))
    }
}

/// Handle `taxledger set <MONTH> <CATEGORY> <SLOT> <VALUE>`
pub fn handle_set_command(
    service: &mut LedgerService,
    settings: &Settings,
    month: &str,
    category: &str,
    slot: usize,
    value: &str,
    year: Option<&str>,
) -> LedgerResult<()> {
    let month = parse_month(month)?;
    let category = parse_category(category)?;
    let index = parse_slot(slot)?;
    let year = year.unwrap_or(service.current_year()).to_string();

    service.set_slot(&year, month, category, index, value)?;

    let record = service
        .record(Some(&year))
        .ok_or_else(|| LedgerError::year_not_found(&year))?;
    let total = month_category_total(record, month, category);
    println!(
        "{} {} {} slot {} = \"{}\" (month total: {} {})",
        year,
        month,
        category,
        slot,
        value.trim(),
        settings.currency_symbol,
        format_amount(total)
    );

    Ok(())
}

/// Handle `taxledger remarks <MONTH> <TEXT>`
pub fn handle_remarks_command(
    service: &mut LedgerService,
    month: &str,
    text: &str,
    year: Option<&str>,
) -> LedgerResult<()> {
    let month = parse_month(month)?;
    let year = year.unwrap_or(service.current_year()).to_string();

    service.set_remarks(&year, month, text)?;
    println!("{} {} remarks updated", year, month);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("jan").unwrap(), Month::Jan);
        assert!(parse_month("month13").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("ddv-in").unwrap(), Category::DdvIn);
        assert!(parse_category("nope").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_slot_is_one_based() {
        assert_eq!(parse_slot(1).unwrap(), 0);
        assert_eq!(parse_slot(7).unwrap(), 6);
        assert!(parse_slot(0).is_err());
        assert!(parse_slot(8).is_err());
    }
}
