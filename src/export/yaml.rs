//! YAML export of a built ledger

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::MonthlyBudget;

/// Write the ledger as YAML with a short header comment
pub fn export_ledger_yaml<W: Write>(budgets: &MonthlyBudget, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::new(budgets);
    let to_export_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# Rollover ledger export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> LedgerResult<LedgerExport> {
    let export: LedgerExport = serde_yaml::from_str(yaml_str)?;
    export.validate().map_err(LedgerError::Validation)?;
    Ok(export)
}
