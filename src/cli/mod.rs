//! CLI command handlers for taxledger
//!
//! Each area gets a handler function (and a subcommand enum where the area
//! has several verbs); `main` parses arguments and dispatches here.

pub mod entry;
pub mod export;
pub mod import;
pub mod show;
pub mod year;

pub use entry::{handle_remarks_command, handle_set_command};
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import_command;
pub use show::{handle_show_command, handle_total_command};
pub use year::{handle_year_command, YearCommands};
