//! Service layer for taxledger
//!
//! The service layer provides business logic on top of the models and
//! storage: derived totals, import validation, and the ledger service that
//! ties mutations to durable saves.

pub mod import;
pub mod ledger;
pub mod totals;
pub mod validate;

pub use import::ImportReport;
pub use ledger::LedgerService;
pub use validate::ValidationError;
