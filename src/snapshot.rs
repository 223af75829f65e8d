//! Input snapshots
//!
//! A snapshot bundles everything one engine run reads: transactions, the
//! previously stored ledger, planned items and loans, optionally with the
//! rollover policy to use. It is loaded once and passed by reference.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{FutureTransaction, Loan, MonthlyBudget, RolloverSettings, Transaction};

/// Everything the engine reads in one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Rollover policy overriding the persisted settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<RolloverSettings>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Previously stored ledger
    #[serde(default, alias = "monthlyBudgets")]
    pub budgets: MonthlyBudget,

    #[serde(default)]
    pub future_transactions: Vec<FutureTransaction>,

    #[serde(default)]
    pub loans: Vec<Loan>,
}

impl Snapshot {
    /// Load a snapshot, choosing the format from the file extension
    ///
    /// `.yaml` and `.yml` are read as YAML, anything else as JSON.
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Snapshot(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    pub fn from_json_str(s: &str) -> LedgerResult<Self> {
        serde_json::from_str(s).map_err(|e| LedgerError::Snapshot(format!("Invalid JSON snapshot: {}", e)))
    }

    pub fn from_yaml_str(s: &str) -> LedgerResult<Self> {
        serde_yaml::from_str(s).map_err(|e| LedgerError::Snapshot(format!("Invalid YAML snapshot: {}", e)))
    }

    /// The snapshot's own rollover policy, or `fallback`
    pub fn rollover_settings(&self, fallback: &RolloverSettings) -> RolloverSettings {
        self.settings.unwrap_or(*fallback)
    }
}
