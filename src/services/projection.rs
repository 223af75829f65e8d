//! Balance projection
//!
//! Estimates the income, expenses and balance of any month by extending the
//! recorded ledger with the planned items. Months that are recorded always
//! report their recorded figures.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::recurrence::applies_to;
use crate::models::{FutureTransaction, Money, MonthKey, MonthlyBudget, TransactionType};

/// Income, expenses and balance for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

/// Planned totals for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlannedTotals {
    pub income: Money,
    pub expenses: Money,
}

impl PlannedTotals {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Projects balances over a ledger snapshot and a set of planned items
pub struct ProjectionEngine<'a> {
    future: &'a [FutureTransaction],
    budgets: &'a MonthlyBudget,
    today: NaiveDate,
}

impl<'a> ProjectionEngine<'a> {
    pub fn new(future: &'a [FutureTransaction], budgets: &'a MonthlyBudget, today: NaiveDate) -> Self {
        Self {
            future,
            budgets,
            today,
        }
    }

    /// Sum of planned income and expenses applying to `month`
    pub fn planned(&self, month: MonthKey) -> PlannedTotals {
        let mut totals = PlannedTotals::default();
        for item in self.future.iter().filter(|item| applies_to(item, month)) {
            match item.kind {
                TransactionType::Income => totals.income += item.amount,
                TransactionType::Expense => totals.expenses += item.amount,
            }
        }
        totals
    }

    /// Project a single month
    ///
    /// - No recorded months: start from zero at the current month and add
    ///   each month's planned net up to and including the target.
    /// - Target within the recorded range: the recorded entry if there is one,
    ///   otherwise zero income and expenses with the ending balance of the
    ///   closest recorded month before it (zero if none).
    /// - Target after the last recorded month: start from its ending balance
    ///   and add each following month's planned net up to and including the
    ///   target.
    ///
    /// For projected months, `income` and `expenses` are the target month's
    /// own planned totals.
    pub fn project(&self, target: MonthKey) -> Projection {
        let Some((&last, last_entry)) = self.budgets.iter().next_back() else {
            let current = MonthKey::from_date(self.today);
            return self.extend(Money::zero(), current, target);
        };

        if target <= last {
            if let Some(entry) = self.budgets.get(&target) {
                return Projection {
                    income: entry.income,
                    expenses: entry.expenses,
                    balance: entry.ending_balance,
                };
            }

            let balance = self
                .budgets
                .range(..target)
                .next_back()
                .map(|(_, entry)| entry.ending_balance)
                .unwrap_or_default();
            return Projection {
                income: Money::zero(),
                expenses: Money::zero(),
                balance,
            };
        }

        self.extend(last_entry.ending_balance, last.next(), target)
    }

    /// Project every month from `from` through `to`, inclusive
    pub fn project_range(&self, from: MonthKey, to: MonthKey) -> Vec<(MonthKey, Projection)> {
        from.through(to)
            .map(|month| (month, self.project(month)))
            .collect()
    }

    /// Add planned nets for `first..target` to `opening`, then the target's own
    fn extend(&self, opening: Money, first: MonthKey, target: MonthKey) -> Projection {
        let mut running = opening;
        let mut month = first;
        while month < target {
            running += self.planned(month).net();
            month = month.next();
        }

        let planned = self.planned(target);
        debug!(target = %target, from = %first, opening = %opening, "projected balance");

        Projection {
            income: planned.income,
            expenses: planned.expenses,
            balance: running + planned.net(),
        }
    }
}

/// Project `target` using today's local date
pub fn project(future: &[FutureTransaction], budgets: &MonthlyBudget, target: MonthKey) -> Projection {
    let today = chrono::Local::now().date_naive();
    ProjectionEngine::new(future, budgets, today).project(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, MonthlyBudgetEntry, RolloverSettings};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key(y: i32, m: u32) -> MonthKey {
        MonthKey::new(y, m).unwrap()
    }

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn recorded(income: i64, expenses: i64, ending: i64) -> MonthlyBudgetEntry {
        let mut entry = MonthlyBudgetEntry::new(&RolloverSettings::default());
        entry.income = units(income);
        entry.expenses = units(expenses);
        entry.starting_balance = units(ending - income + expenses);
        entry.recompute();
        entry
    }

    fn planned(kind: TransactionType, amount: i64, frequency: Frequency, start: NaiveDate) -> FutureTransaction {
        FutureTransaction::new(kind, "Planned", units(amount), frequency, start)
    }

    #[test]
    fn test_projection_after_last_recorded_month() {
        let mut budgets = MonthlyBudget::new();
        budgets.insert(key(2024, 1), recorded(0, 0, 5000));
        let future = vec![planned(
            TransactionType::Expense,
            100,
            Frequency::Monthly,
            date(2024, 1, 1),
        )];

        let engine = ProjectionEngine::new(&future, &budgets, date(2024, 1, 15));
        let projection = engine.project(key(2024, 9));
        assert_eq!(projection.balance, units(5000 - 100 * 8));
        assert_eq!(projection.expenses, units(100));
        assert_eq!(projection.income, Money::zero());
    }

    #[test]
    fn test_recorded_month_wins() {
        let mut budgets = MonthlyBudget::new();
        budgets.insert(key(2024, 1), recorded(1000, 400, 600));
        budgets.insert(key(2024, 2), recorded(200, 900, -100));
        let future = vec![planned(
            TransactionType::Income,
            5000,
            Frequency::Monthly,
            date(2023, 1, 1),
        )];

        let engine = ProjectionEngine::new(&future, &budgets, date(2024, 2, 1));
        assert_eq!(
            engine.project(key(2024, 1)),
            Projection {
                income: units(1000),
                expenses: units(400),
                balance: units(600)
            }
        );
    }

    #[test]
    fn test_gap_inside_recorded_range() {
        let mut budgets = MonthlyBudget::new();
        budgets.insert(key(2024, 1), recorded(1000, 400, 600));
        budgets.insert(key(2024, 5), recorded(0, 100, 500));
        let engine = ProjectionEngine::new(&[], &budgets, date(2024, 5, 1));

        assert_eq!(
            engine.project(key(2024, 3)),
            Projection {
                income: Money::zero(),
                expenses: Money::zero(),
                balance: units(600)
            }
        );
        assert_eq!(engine.project(key(2023, 6)).balance, Money::zero());
    }

    #[test]
    fn test_no_recorded_months_starts_at_current_month() {
        let future = vec![
            planned(TransactionType::Income, 1000, Frequency::Monthly, date(2024, 1, 1)),
            planned(TransactionType::Expense, 300, Frequency::Quarterly, date(2024, 1, 1)),
        ];
        let budgets = MonthlyBudget::new();
        let engine = ProjectionEngine::new(&future, &budgets, date(2024, 3, 10));

        // March (+1000), April (+1000 - 300), May (+1000)
        let may = engine.project(key(2024, 5));
        assert_eq!(may.balance, units(2700));
        assert_eq!(may.income, units(1000));
        assert_eq!(may.expenses, Money::zero());

        let april = engine.project(key(2024, 4));
        assert_eq!(april.expenses, units(300));
        assert_eq!(april.balance, units(1700));
    }

    #[test]
    fn test_no_recorded_months_target_before_current() {
        let future = vec![planned(TransactionType::Income, 50, Frequency::Monthly, date(2020, 1, 1))];
        let budgets = MonthlyBudget::new();
        let engine = ProjectionEngine::new(&future, &budgets, date(2024, 3, 10));
        assert_eq!(engine.project(key(2024, 1)).balance, units(50));
    }

    #[test]
    fn test_projection_next_month_includes_only_target() {
        let mut budgets = MonthlyBudget::new();
        budgets.insert(key(2024, 1), recorded(0, 0, 1000));
        let future = vec![planned(TransactionType::Expense, 250, Frequency::OneTime, date(2024, 2, 14))];

        let engine = ProjectionEngine::new(&future, &budgets, date(2024, 1, 20));
        assert_eq!(engine.project(key(2024, 2)).balance, units(750));
        assert_eq!(engine.project(key(2024, 3)).balance, units(750));
        assert_eq!(engine.project(key(2024, 3)).expenses, Money::zero());
    }

    #[test]
    fn test_project_range_matches_single_projections() {
        let mut budgets = MonthlyBudget::new();
        budgets.insert(key(2024, 1), recorded(100, 0, 100));
        budgets.insert(key(2024, 3), recorded(0, 50, 50));
        let future = vec![planned(TransactionType::Income, 10, Frequency::Monthly, date(2024, 1, 1))];
        let engine = ProjectionEngine::new(&future, &budgets, date(2024, 3, 1));

        let series = engine.project_range(key(2023, 12), key(2024, 6));
        assert_eq!(series.len(), 7);
        for (month, projection) in &series {
            assert_eq!(*projection, engine.project(*month));
        }
        assert!(engine.project_range(key(2024, 6), key(2024, 5)).is_empty());
    }

    #[test]
    fn test_does_not_mutate_budgets() {
        let mut budgets = MonthlyBudget::new();
        budgets.insert(key(2024, 1), recorded(0, 0, 10));
        let before = budgets.clone();
        let engine = ProjectionEngine::new(&[], &budgets, date(2024, 1, 1));
        engine.project(key(2025, 1));
        assert_eq!(budgets, before);
    }
}
