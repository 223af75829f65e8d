//! Rate and breakdown helpers over ledger data

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Money, MonthKey, MonthlyBudgetEntry, Transaction, TransactionType};

/// Label used for transactions with an empty category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// `part` as a percentage of `whole`; zero when `whole` is zero
pub fn percentage(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    part.as_decimal() / whole.as_decimal() * 100.0
}

/// Share of the month's income left after expenses, as a percentage
pub fn savings_rate(entry: &MonthlyBudgetEntry) -> f64 {
    percentage(entry.net(), entry.income)
}

/// Total for one category within a month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    pub percentage: f64,
}

/// Per-category totals of one transaction type in a month
///
/// Sorted by amount, largest first, then by name. Transactions without a
/// usable date count toward the month containing `today`.
pub fn category_breakdown(
    transactions: &[Transaction],
    month: MonthKey,
    kind: TransactionType,
    today: NaiveDate,
) -> Vec<CategoryTotal> {
    let current = MonthKey::from_date(today);
    let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();

    for txn in transactions
        .iter()
        .filter(|t| t.kind == kind && t.month_key_or(current) == month)
    {
        let name = match txn.category.trim() {
            "" => UNCATEGORIZED,
            name => name,
        };
        *by_category.entry(name).or_default() += txn.amount;
    }

    let total: Money = by_category.values().sum();
    let mut totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
            percentage: percentage(amount, total),
        })
        .collect();

    totals.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RolloverSettings;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(units(10), Money::zero()), 0.0);
        assert_eq!(percentage(units(25), units(100)), 25.0);
    }

    #[test]
    fn test_savings_rate() {
        let mut entry = MonthlyBudgetEntry::new(&RolloverSettings::default());
        assert_eq!(savings_rate(&entry), 0.0);

        entry.income = units(1000);
        entry.expenses = units(400);
        entry.recompute();
        assert_eq!(savings_rate(&entry), 60.0);

        entry.expenses = units(1500);
        assert_eq!(savings_rate(&entry), -50.0);
    }

    #[test]
    fn test_category_breakdown() {
        let txns = vec![
            Transaction::expense(date(2024, 1, 3), "Food", units(100)),
            Transaction::expense(date(2024, 1, 9), "Rent", units(300)),
            Transaction::expense(date(2024, 1, 20), "Food", units(100)),
            Transaction::expense(date(2024, 1, 21), "  ", units(200)),
            Transaction::expense(date(2024, 2, 1), "Rent", units(300)),
            Transaction::income(date(2024, 1, 1), "Salary", units(2000)),
        ];
        let jan = MonthKey::new(2024, 1).unwrap();
        let breakdown = category_breakdown(&txns, jan, TransactionType::Expense, date(2024, 3, 1));

        let names: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", UNCATEGORIZED]);
        assert_eq!(breakdown[0].amount, units(300));
        assert_eq!(breakdown[0].percentage, 300.0 / 700.0 * 100.0);

        let income = category_breakdown(&txns, jan, TransactionType::Income, date(2024, 3, 1));
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].percentage, 100.0);
    }

    #[test]
    fn test_breakdown_of_empty_month() {
        let month = MonthKey::new(2030, 1).unwrap();
        assert!(category_breakdown(&[], month, TransactionType::Expense, date(2024, 1, 1)).is_empty());
    }
}
