//! CSV export of a built ledger
//!
//! One row per month, amounts as decimal units.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::MonthlyBudget;

const HEADER: [&str; 7] = [
    "month",
    "starting_balance",
    "income",
    "expenses",
    "ending_balance",
    "auto_rollover",
    "allow_negative",
];

/// Write the ledger as CSV, oldest month first
pub fn export_ledger_csv<W: Write>(budgets: &MonthlyBudget, writer: W) -> LedgerResult<()> {
    let to_export_err = |e: ::csv::Error| LedgerError::Export(e.to_string());
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(to_export_err)?;

    for (month, entry) in budgets {
        csv_writer
            .write_record([
                month.to_string(),
                format!("{:.2}", entry.starting_balance.as_decimal()),
                format!("{:.2}", entry.income.as_decimal()),
                format!("{:.2}", entry.expenses.as_decimal()),
                format!("{:.2}", entry.ending_balance.as_decimal()),
                entry.auto_rollover.to_string(),
                entry.allow_negative.to_string(),
            ])
            .map_err(to_export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
