use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use taxledger::cli::{
    handle_export_command, handle_import_command, handle_remarks_command, handle_set_command,
    handle_show_command, handle_total_command, handle_year_command, ExportCommands, YearCommands,
};
use taxledger::config::{paths::LedgerPaths, settings::Settings};
use taxledger::services::LedgerService;

#[derive(Parser)]
#[command(
    name = "taxledger",
    version,
    about = "Terminal-based quarterly tax entry ledger",
    long_about = "taxledger records tax-related amounts across 12 months and 8 fixed \
                  categories (7 entry slots each), derives quarterly and annual totals, \
                  and keeps everything in a single JSON ledger with JSON import/export."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a quarter table with per-category totals
    Show {
        /// Quarter number 1-4 (defaults to the current quarter)
        #[arg(short, long)]
        quarter: Option<u8>,
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Set an entry slot value
    Set {
        /// Month name (JAN..DEC)
        month: String,
        /// Category label, e.g. "DDV IN" or ddv-in
        category: String,
        /// Slot number (1-7)
        slot: usize,
        /// Raw value; kept verbatim, non-numeric text counts as 0 in totals
        value: String,
        /// Year to edit (defaults to the current year)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Set a month's remarks
    Remarks {
        /// Month name (JAN..DEC)
        month: String,
        /// Free-form notes
        text: String,
        /// Year to edit (defaults to the current year)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Year management commands
    #[command(subcommand)]
    Year(YearCommands),

    /// Show the annual (or one quarter's) grand total
    Total {
        /// Quarter number 1-4 (omit for the annual total)
        #[arg(short, long)]
        quarter: Option<u8>,
        /// Year to total (defaults to the current year)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Export commands (quarter snapshot or full year)
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import a year export or multi-year bundle
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?.start()?;

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut service = LedgerService::open(&paths)?;

    match cli.command {
        Commands::Show { quarter, year } => {
            handle_show_command(&service, &settings, quarter, year.as_deref())?;
        }
        Commands::Set {
            month,
            category,
            slot,
            value,
            year,
        } => {
            handle_set_command(
                &mut service,
                &settings,
                &month,
                &category,
                slot,
                &value,
                year.as_deref(),
            )?;
        }
        Commands::Remarks { month, text, year } => {
            handle_remarks_command(&mut service, &month, &text, year.as_deref())?;
        }
        Commands::Year(cmd) => {
            handle_year_command(&mut service, cmd)?;
        }
        Commands::Total { quarter, year } => {
            handle_total_command(&service, &settings, quarter, year.as_deref())?;
        }
        Commands::Export(cmd) => {
            handle_export_command(&service, &settings, cmd)?;
        }
        Commands::Import { file } => {
            handle_import_command(&mut service, &file)?;
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!("Pretty exports: {}", settings.pretty_exports);
            println!("Current year:   {}", service.current_year());
        }
    }

    Ok(())
}
