//! JSON export of a built ledger
//!
//! Wraps the month map in a small envelope carrying a schema version and an
//! export timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::MonthlyBudget;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Ledger export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    /// Monthly entries keyed by `YYYY-MM`
    pub monthly_budgets: MonthlyBudget,
}

impl LedgerExport {
    pub fn new(budgets: &MonthlyBudget) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            monthly_budgets: budgets.clone(),
        }
    }

    /// Reject exports whose entries do not balance
    pub fn validate(&self) -> Result<(), String> {
        if !self.schema_version.starts_with("1.") {
            return Err(format!(
                "Unsupported schema version: {}",
                self.schema_version
            ));
        }

        match self
            .monthly_budgets
            .iter()
            .find(|(_, entry)| !entry.is_balanced())
        {
            Some((month, entry)) => Err(format!(
                "Entry for {} does not balance: {}",
                month, entry
            )),
            None => Ok(()),
        }
    }
}

/// Write the ledger as pretty-printed JSON
pub fn export_ledger_json<W: Write>(budgets: &MonthlyBudget, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::new(budgets);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> LedgerResult<LedgerExport> {
    let export: LedgerExport = serde_json::from_str(json_str)?;
    export.validate().map_err(LedgerError::Validation)?;
    Ok(export)
}
