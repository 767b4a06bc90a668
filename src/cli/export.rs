//! Export commands
//!
//! Writes quarter snapshots and full-year exports to JSON files.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::snapshot::write_export;
use crate::models::Quarter;
use crate::services::LedgerService;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export one quarter of the current year with computed totals
    Quarter {
        /// Quarter number (1-4)
        quarter: u8,
        /// Output file (defaults to tax-quarter-<N>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the current year in full
    Year {
        /// Output file (defaults to tax-year-<YEAR>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(
    service: &LedgerService,
    settings: &Settings,
    cmd: ExportCommands,
) -> LedgerResult<()> {
    match cmd {
        ExportCommands::Quarter { quarter, output } => {
            let quarter = Quarter::from_number(quarter).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Quarter must be between 1 and 4, got {}",
                    quarter
                ))
            })?;

            let snapshot = service.quarter_snapshot(quarter);
            let path = output.unwrap_or_else(|| PathBuf::from(snapshot.default_file_name()));
            write_to_file(&snapshot, &path, settings.pretty_exports)?;
            println!("Exported {} {} to {}", snapshot.year, quarter, path.display());
        }

        ExportCommands::Year { output } => {
            let export = service.year_export();
            let path = output.unwrap_or_else(|| PathBuf::from(export.default_file_name()));
            write_to_file(&export, &path, settings.pretty_exports)?;
            println!("Exported year {} to {}", export.year, path.display());
        }
    }

    Ok(())
}

fn write_to_file<T: serde::Serialize>(
    payload: &T,
    path: &std::path::Path,
    pretty: bool,
) -> LedgerResult<()> {
    let file = File::create(path)
        .map_err(|e| LedgerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    write_export(payload, &mut writer, pretty)
}
