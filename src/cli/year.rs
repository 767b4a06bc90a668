//! Year management commands

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::services::LedgerService;

/// Year subcommands
#[derive(Subcommand)]
pub enum YearCommands {
    /// Show the currently selected year
    Current,

    /// List all years in the ledger
    List,

    /// Switch to a year (creates an empty one if missing)
    Switch {
        /// Year identifier, e.g. "2026"
        year: String,
    },

    /// Create an empty year without switching to it
    Create {
        /// Year identifier, e.g. "2027"
        year: String,
    },
}

/// Handle a year command
pub fn handle_year_command(service: &mut LedgerService, cmd: YearCommands) -> LedgerResult<()> {
    match cmd {
        YearCommands::Current => {
            println!("{}", service.current_year());
        }

        YearCommands::List => {
            let current = service.current_year().to_string();
            for year in service.year_ids() {
                let marker = if year == current { "*" } else { " " };
                println!("{} {}", marker, year);
            }
        }

        YearCommands::Switch { year } => {
            service.switch_year(&year)?;
            println!("Switched to year {}", year);
        }

        YearCommands::Create { year } => {
            let existed = service.record(Some(&year)).is_some();
            service.create_year(&year)?;
            if existed {
                println!("Year {} already exists", year);
            } else {
                println!("Created year {}", year);
            }
        }
    }

    Ok(())
}
