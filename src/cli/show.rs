//! Display commands
//!
//! Renders quarter tables and grand totals for the terminal.

use chrono::Datelike;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_quarter_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Month, Quarter, YearRecord};
use crate::services::totals::{annual_grand_total, quarter_grand_total};
use crate::services::LedgerService;

/// Parse a quarter argument, defaulting to today's quarter
pub(crate) fn resolve_quarter(arg: Option<u8>) -> LedgerResult<Quarter> {
    match arg {
        Some(n) => Quarter::from_number(n).ok_or_else(|| {
            LedgerError::Validation(format!("Quarter must be between 1 and 4, got {}", n))
        }),
        None => {
            let month = Month::from_index(chrono::Local::now().month0() as usize)
                .unwrap_or(Month::Jan);
            Ok(month.quarter())
        }
    }
}

/// Resolve a year argument against the ledger, defaulting to the current year
fn resolve_record<'a>(
    service: &'a LedgerService,
    year: Option<&str>,
) -> LedgerResult<(String, &'a YearRecord)> {
    let year_id = year.unwrap_or(service.current_year()).to_string();
    let record = service
        .record(Some(&year_id))
        .ok_or_else(|| LedgerError::year_not_found(&year_id))?;
    Ok((year_id, record))
}

/// Handle `taxledger show`
pub fn handle_show_command(
    service: &LedgerService,
    settings: &Settings,
    quarter: Option<u8>,
    year: Option<&str>,
) -> LedgerResult<()> {
    let quarter = resolve_quarter(quarter)?;
    let (year_id, record) = resolve_record(service, year)?;

    print!(
        "{}",
        format_quarter_table(&year_id, record, quarter, &settings.currency_symbol)
    );
    println!();
    println!(
        "Annual Grand Total: {} {}",
        settings.currency_symbol,
        format_amount(annual_grand_total(record))
    );

    Ok(())
}

/// Handle `taxledger total`
pub fn handle_total_command(
    service: &LedgerService,
    settings: &Settings,
    quarter: Option<u8>,
    year: Option<&str>,
) -> LedgerResult<()> {
    let (year_id, record) = resolve_record(service, year)?;

    match quarter {
        Some(n) => {
            let quarter = Quarter::from_number(n).ok_or_else(|| {
                LedgerError::Validation(format!("Quarter must be between 1 and 4, got {}", n))
            })?;
            println!(
                "{} {} Grand Total (all categories): {} {}",
                year_id,
                quarter,
                settings.currency_symbol,
                format_amount(quarter_grand_total(record, quarter))
            );
        }
        None => {
            println!(
                "{} Annual Grand Total (all categories, all months): {} {}",
                year_id,
                settings.currency_symbol,
                format_amount(annual_grand_total(record))
            );
        }
    }

    Ok(())
}
