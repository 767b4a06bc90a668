//! Export builders for taxledger
//!
//! Produces read-only, timestamped JSON export payloads: quarter snapshots
//! with computed totals, and full-year exports.

pub mod snapshot;

pub use snapshot::{QuarterSnapshot, SnapshotCell, SnapshotMonth, YearExport};
