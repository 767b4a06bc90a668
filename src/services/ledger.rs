//! Ledger service
//!
//! Owns the loaded ledger and its repository, and ties every mutation to a
//! durable save. The persistence policy is synchronous-on-change: a CLI
//! process performs one mutation per invocation, so there is nothing to
//! coalesce, and no edit can ever be dropped. If a save fails the error is
//! surfaced and the in-memory ledger stays authoritative for the rest of
//! the process.

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::export::{QuarterSnapshot, YearExport};
use crate::models::{Category, Ledger, Month, Quarter, YearRecord};
use crate::storage::LedgerRepository;

use super::import::{apply_import, ImportReport};

/// Service tying the in-memory ledger to durable storage
pub struct LedgerService {
    ledger: Ledger,
    repository: LedgerRepository,
}

impl LedgerService {
    /// Open the ledger from the configured paths
    pub fn open(paths: &LedgerPaths) -> LedgerResult<Self> {
        let repository = LedgerRepository::new(paths)?;
        let ledger = repository.load();
        Ok(Self { ledger, repository })
    }

    /// Read-only access to the underlying ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The currently selected year identifier
    pub fn current_year(&self) -> &str {
        self.ledger.current_year()
    }

    /// All known year identifiers, sorted
    pub fn year_ids(&self) -> Vec<&str> {
        self.ledger.year_ids()
    }

    /// The record for a year, defaulting to the current one
    pub fn record(&self, year_id: Option<&str>) -> Option<&YearRecord> {
        match year_id {
            Some(id) => self.ledger.year(id),
            None => Some(self.ledger.current_record()),
        }
    }

    /// Store a slot value and persist
    pub fn set_slot(
        &mut self,
        year_id: &str,
        month: Month,
        category: Category,
        slot: usize,
        raw: &str,
    ) -> LedgerResult<()> {
        self.ledger.set_slot(year_id, month, category, slot, raw);
        self.repository.save(&self.ledger)
    }

    /// Store month remarks and persist
    pub fn set_remarks(&mut self, year_id: &str, month: Month, text: &str) -> LedgerResult<()> {
        self.ledger.set_remarks(year_id, month, text);
        self.repository.save(&self.ledger)
    }

    /// Select a year (creating it if needed) and persist
    pub fn switch_year(&mut self, year_id: &str) -> LedgerResult<()> {
        self.ledger.set_current_year(year_id);
        self.repository.save(&self.ledger)
    }

    /// Create an empty year record if absent and persist
    pub fn create_year(&mut self, year_id: &str) -> LedgerResult<()> {
        self.ledger.ensure_year(year_id);
        self.repository.save(&self.ledger)
    }

    /// Import a JSON payload, merging on success, and persist once
    ///
    /// Validation failures reject the whole payload and leave both the
    /// in-memory ledger and the stored file untouched.
    pub fn import_str(&mut self, text: &str) -> LedgerResult<ImportReport> {
        let report = apply_import(&mut self.ledger, text)?;
        self.repository.save(&self.ledger)?;
        Ok(report)
    }

    /// Build a quarter snapshot of the current year
    pub fn quarter_snapshot(&self, quarter: Quarter) -> QuarterSnapshot {
        QuarterSnapshot::build(
            self.ledger.current_year(),
            self.ledger.current_record(),
            quarter,
        )
    }

    /// Build a full-year export of the current year
    pub fn year_export(&self) -> YearExport {
        YearExport::build(self.ledger.current_year(), self.ledger.current_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::totals::annual_grand_total;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_service() -> (TempDir, LedgerService) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let service = LedgerService::open(&paths).unwrap();
        (temp_dir, service)
    }

    #[test]
    fn test_mutations_are_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let mut service = LedgerService::open(&paths).unwrap();
            let year = service.current_year().to_string();
            service
                .set_slot(&year, Month::Jan, Category::DdvIn, 0, "100")
                .unwrap();
            service.set_remarks(&year, Month::Jan, "opening").unwrap();
        }

        let service = LedgerService::open(&paths).unwrap();
        let record = service.record(None).unwrap();
        assert_eq!(record.slots(Month::Jan, Category::DdvIn)[0], "100");
        assert_eq!(record.month(Month::Jan).remarks, "opening");
    }

    #[test]
    fn test_switch_year_creates_and_selects() {
        let (_temp_dir, mut service) = create_test_service();
        service.switch_year("2031").unwrap();
        assert_eq!(service.current_year(), "2031");
        assert!(service.record(Some("2031")).is_some());
    }

    #[test]
    fn test_import_export_round_trip() {
        let (_temp_dir, mut service) = create_test_service();

        let empty = serde_json::to_value(YearRecord::empty()).unwrap();
        let text = json!({"year": "2030", "data": empty}).to_string();
        let report = service.import_str(&text).unwrap();
        assert_eq!(report.current_year, "2030");
        assert_eq!(service.current_year(), "2030");

        let export = service.year_export();
        assert_eq!(export.year, "2030");
        assert_eq!(export.data, YearRecord::empty());
    }

    #[test]
    fn test_failed_import_changes_nothing() {
        let (_temp_dir, mut service) = create_test_service();
        let year = service.current_year().to_string();
        service
            .set_slot(&year, Month::Jan, Category::DdvIn, 0, "100")
            .unwrap();

        let before = service.ledger().clone();
        assert!(service.import_str(r#"{"foo": 1}"#).is_err());
        assert_eq!(service.ledger(), &before);
        assert_eq!(annual_grand_total(service.record(None).unwrap()), 100.0);
    }
}
