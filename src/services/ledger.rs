//! Monthly ledger construction
//!
//! Aggregates transactions into per-month income and expense totals and
//! carries each month's ending balance into the next month.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::models::{
    Money, MonthKey, MonthlyBudget, MonthlyBudgetEntry, RolloverSettings, Transaction,
    TransactionType,
};

/// Income and expense totals for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub income: Money,
    pub expenses: Money,
}

/// Builds the month-by-month ledger from a transaction snapshot
pub struct LedgerBuilder<'a> {
    settings: &'a RolloverSettings,
    today: NaiveDate,
}

impl<'a> LedgerBuilder<'a> {
    /// Create a builder; `today` decides which month is "current"
    pub fn new(settings: &'a RolloverSettings, today: NaiveDate) -> Self {
        Self { settings, today }
    }

    /// Sum transactions per month
    ///
    /// Transactions without a usable date count toward the current month.
    pub fn month_totals(&self, transactions: &[Transaction]) -> BTreeMap<MonthKey, MonthTotals> {
        let current = MonthKey::from_date(self.today);
        let mut totals: BTreeMap<MonthKey, MonthTotals> = BTreeMap::new();

        for txn in transactions {
            if txn.date.is_none() {
                warn!(transaction = %txn.id, month = %current, "transaction has no valid date, counting it in the current month");
            }
            let month = totals.entry(txn.month_key_or(current)).or_default();
            match txn.kind {
                TransactionType::Income => month.income += txn.amount,
                TransactionType::Expense => month.expenses += txn.amount,
            }
        }

        totals
    }

    /// Build the ledger
    ///
    /// Every month holding a transaction, every month already present in
    /// `existing`, and the current month get an entry. Months are then walked
    /// in order: totals are recomputed from the transactions, the ending
    /// balance is derived, and when the month has `auto_rollover` set its
    /// carry amount becomes the next month's starting balance. A month with
    /// `auto_rollover` off leaves the next month's starting balance as it was.
    ///
    /// `existing` is not modified; the result is a new map.
    pub fn build(&self, transactions: &[Transaction], existing: &MonthlyBudget) -> MonthlyBudget {
        let current = MonthKey::from_date(self.today);
        let totals = self.month_totals(transactions);

        let mut budgets = existing.clone();
        for month in totals.keys().copied().chain(std::iter::once(current)) {
            budgets
                .entry(month)
                .or_insert_with(|| MonthlyBudgetEntry::new(self.settings));
        }

        let mut carry: Option<Money> = None;
        for (month, entry) in budgets.iter_mut() {
            if let Some(amount) = carry.take() {
                entry.starting_balance = amount;
            }

            let month_totals = totals.get(month).copied().unwrap_or_default();
            entry.income = month_totals.income;
            entry.expenses = month_totals.expenses;
            entry.recompute();

            if entry.auto_rollover {
                carry = Some(entry.carry_amount());
            }
        }

        debug!(
            transactions = transactions.len(),
            months = budgets.len(),
            "built monthly ledger"
        );

        budgets
    }
}

/// Build the ledger using today's local date
pub fn build_ledger(
    transactions: &[Transaction],
    existing: &MonthlyBudget,
    settings: &RolloverSettings,
) -> MonthlyBudget {
    let today = chrono::Local::now().date_naive();
    LedgerBuilder::new(settings, today).build(transactions, existing)
}
