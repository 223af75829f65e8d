//! CLI command handlers
//!
//! Bridges clap argument parsing with the engine: each command loads a
//! snapshot file, runs the engine over it and prints the result.

pub mod ledger;
pub mod loan;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthKey, MonthlyBudget, RolloverSettings};
use crate::services::LedgerBuilder;
use crate::snapshot::Snapshot;

pub use ledger::{
    handle_breakdown_command, handle_build_command, handle_project_command, BreakdownArgs,
    BuildArgs, ProjectArgs,
};
pub use loan::{handle_loans_command, LoansArgs};

/// Arguments shared by every command that reads a snapshot
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Snapshot file (.json, .yaml or .yml)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<String>,
}

impl SnapshotArgs {
    /// The reference date for "current month" and "overdue" decisions
    pub fn today(&self) -> LedgerResult<NaiveDate> {
        match &self.today {
            Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
                LedgerError::Validation(format!("Invalid date: {}. Use YYYY-MM-DD", s))
            }),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }

    pub fn load(&self) -> LedgerResult<Snapshot> {
        Snapshot::load(&self.file)
    }
}

/// Output format for the built ledger
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

/// Parse a `YYYY-MM` argument
pub fn parse_month(s: &str) -> LedgerResult<MonthKey> {
    MonthKey::parse(s)
        .map_err(|e| LedgerError::Validation(format!("{}. Use YYYY-MM (e.g., 2025-01)", e)))
}

/// Load the snapshot and build its ledger
fn build_from_args(
    args: &SnapshotArgs,
    settings: &Settings,
) -> LedgerResult<(Snapshot, MonthlyBudget, RolloverSettings, NaiveDate)> {
    let today = args.today()?;
    let snapshot = args.load()?;
    let policy = snapshot.rollover_settings(&settings.rollover);
    let budgets =
        LedgerBuilder::new(&policy, today).build(&snapshot.transactions, &snapshot.budgets);
    Ok((snapshot, budgets, policy, today))
}
