//! Configuration management for taxledger
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
