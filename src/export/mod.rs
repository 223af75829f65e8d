//! Ledger export
//!
//! Writes a built ledger in several formats:
//! - JSON: machine-readable, suitable for backup files
//! - YAML: human-readable
//! - CSV: spreadsheet-compatible, one row per month

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_ledger_csv;
pub use self::json::{export_ledger_json, import_from_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_ledger_yaml, import_from_yaml};
