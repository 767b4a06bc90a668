//! Ledger repository for JSON storage
//!
//! Loads and saves the multi-year ledger as a single JSON file, migrating
//! the legacy single-year layout on first load.

use std::path::PathBuf;

use chrono::Datelike;
use log::{info, warn};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Ledger, YearRecord};

use super::file_io::{read_json_opt, write_json_atomic};

/// Repository for ledger persistence
pub struct LedgerRepository {
    ledger_path: PathBuf,
    legacy_path: PathBuf,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger_path: paths.ledger_file(),
            legacy_path: paths.legacy_year_file(),
        })
    }

    /// Load the ledger from disk
    ///
    /// Resolution order:
    /// 1. the multi-year ledger file;
    /// 2. the legacy single-year file, wrapped as the current calendar
    ///    year and migrated one-shot (the legacy file is deleted once the
    ///    new layout is durably written);
    /// 3. a fresh ledger seeded with an empty record for the current
    ///    calendar year.
    ///
    /// Corrupt files are logged and skipped; load itself never fails.
    pub fn load(&self) -> Ledger {
        match read_json_opt::<Ledger>(&self.ledger_path) {
            Ok(Some(mut ledger)) => {
                ledger.normalize();
                return ledger;
            }
            Ok(None) => {}
            Err(e) => warn!("ledger file unreadable, checking legacy layout: {}", e),
        }

        let current_year = current_calendar_year();

        match read_json_opt::<YearRecord>(&self.legacy_path) {
            Ok(Some(mut record)) => {
                record.normalize();
                let mut ledger = Ledger::new(current_year.clone());
                ledger.merge_year(&current_year, record);
                info!(
                    "migrated legacy single-year data into year {}",
                    current_year
                );
                // Delete the legacy file only after the new layout is durable,
                // otherwise the migration could lose the only copy.
                match self.save(&ledger) {
                    Ok(()) => {
                        if let Err(e) = std::fs::remove_file(&self.legacy_path) {
                            warn!("could not remove legacy file: {}", e);
                        }
                    }
                    Err(e) => warn!("could not persist migrated ledger: {}", e),
                }
                ledger
            }
            Ok(None) => Ledger::new(current_year),
            Err(e) => {
                warn!("legacy file unreadable, starting fresh: {}", e);
                Ledger::new(current_year)
            }
        }
    }

    /// Save the full ledger to disk atomically
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        write_json_atomic(&self.ledger_path, ledger)
    }
}

/// The current calendar year as a year identifier
pub fn current_calendar_year() -> String {
    chrono::Local::now().year().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Month};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, LedgerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let repo = LedgerRepository::new(&paths).unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_fresh_load_seeds_current_calendar_year() {
        let (_temp_dir, repo) = create_test_repo();
        let ledger = repo.load();

        assert_eq!(ledger.current_year(), current_calendar_year());
        assert!(ledger.contains_year(&current_calendar_year()));
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();

        let mut ledger = repo.load();
        ledger.set_slot("2026", Month::Jan, Category::DdvIn, 0, "100");
        ledger.set_current_year("2026");
        repo.save(&ledger).unwrap();

        let reloaded = repo.load();
        assert_eq!(reloaded.current_year(), "2026");
        assert_eq!(
            reloaded.slot("2026", Month::Jan, Category::DdvIn, 0),
            Some("100")
        );
    }

    #[test]
    fn test_legacy_migration_is_one_shot() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let repo = LedgerRepository::new(&paths).unwrap();

        // Seed a legacy single-year file
        let mut legacy = YearRecord::empty();
        legacy.month_mut(Month::Feb).remarks = "old data".to_string();
        write_json_atomic(paths.legacy_year_file(), &legacy).unwrap();

        let ledger = repo.load();
        let year = current_calendar_year();
        assert_eq!(ledger.current_year(), year);
        assert_eq!(ledger.remarks(&year, Month::Feb), Some("old data"));

        // Legacy file is gone and the new layout is durable
        assert!(!paths.legacy_year_file().exists());
        assert!(paths.ledger_file().exists());

        let reloaded = repo.load();
        assert_eq!(reloaded.remarks(&year, Month::Feb), Some("old data"));
    }

    #[test]
    fn test_corrupt_ledger_falls_back_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let repo = LedgerRepository::new(&paths).unwrap();

        std::fs::write(paths.ledger_file(), "{ this is not json").unwrap();

        let ledger = repo.load();
        assert_eq!(ledger.current_year(), current_calendar_year());
        assert_eq!(ledger.year_ids().len(), 1);
    }
}
