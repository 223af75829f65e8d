//! Monthly budget entries
//!
//! One entry per calendar month, holding the balance carried in, the month's
//! income and expense totals, and the resulting balance carried out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;
use super::month::MonthKey;

/// The ledger: one entry per month, iterated in chronological order
pub type MonthlyBudget = BTreeMap<MonthKey, MonthlyBudgetEntry>;

/// Rollover policy applied to newly created months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloverSettings {
    /// Carry each month's ending balance into the next month
    #[serde(default = "default_auto_rollover")]
    pub auto_rollover: bool,

    /// Carry negative balances as-is instead of resetting them to zero
    #[serde(default)]
    pub allow_negative_rollover: bool,
}

fn default_auto_rollover() -> bool {
    true
}

impl Default for RolloverSettings {
    fn default() -> Self {
        Self {
            auto_rollover: default_auto_rollover(),
            allow_negative_rollover: false,
        }
    }
}

/// Balance summary for a single month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBudgetEntry {
    pub starting_balance: Money,
    pub income: Money,
    pub expenses: Money,
    pub ending_balance: Money,
    pub auto_rollover: bool,
    pub allow_negative: bool,
}

impl MonthlyBudgetEntry {
    /// An empty month using the given rollover policy
    pub fn new(settings: &RolloverSettings) -> Self {
        Self {
            starting_balance: Money::zero(),
            income: Money::zero(),
            expenses: Money::zero(),
            ending_balance: Money::zero(),
            auto_rollover: settings.auto_rollover,
            allow_negative: settings.allow_negative_rollover,
        }
    }

    /// Net change over the month
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }

    /// Recompute `ending_balance` from the other three amounts
    pub fn recompute(&mut self) {
        self.ending_balance = self.starting_balance + self.net();
    }

    /// Check `ending = starting + income - expenses`
    pub fn is_balanced(&self) -> bool {
        self.ending_balance == self.starting_balance + self.net()
    }

    /// The amount that would open the next month: the ending balance,
    /// floored at zero unless negative carry is allowed
    pub fn carry_amount(&self) -> Money {
        if self.allow_negative || !self.ending_balance.is_negative() {
            self.ending_balance
        } else {
            Money::zero()
        }
    }
}

impl fmt::Display for MonthlyBudgetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Start: {} | Income: {} | Expenses: {} | End: {}",
            self.starting_balance, self.income, self.expenses, self.ending_balance
        )
    }
}
