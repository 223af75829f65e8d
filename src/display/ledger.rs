//! Ledger and projection display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Money, MonthKey, MonthlyBudget};
use crate::services::{savings_rate, CategoryTotal, Projection};

use super::format_percentage;

#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Start")]
    starting: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "End")]
    ending: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Rollover")]
    rollover: String,
}

/// Format the ledger as a table, oldest month first
pub fn format_ledger(budgets: &MonthlyBudget, symbol: &str) -> String {
    if budgets.is_empty() {
        return "No months recorded.".to_string();
    }

    let rows = budgets.iter().map(|(month, entry)| LedgerRow {
        month: month.to_string(),
        starting: entry.starting_balance.format_with_symbol(symbol),
        income: entry.income.format_with_symbol(symbol),
        expenses: entry.expenses.format_with_symbol(symbol),
        ending: entry.ending_balance.format_with_symbol(symbol),
        saved: format_percentage(savings_rate(entry)),
        rollover: match (entry.auto_rollover, entry.allow_negative) {
            (false, _) => "off".to_string(),
            (true, false) => "on".to_string(),
            (true, true) => "on (negative)".to_string(),
        },
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..6)).with(Alignment::right()))
        .to_string()
}

#[derive(Tabled)]
struct ProjectionRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Source")]
    source: &'static str,
}

/// Format projected months; recorded months are marked as actual
pub fn format_projections(
    projections: &[(MonthKey, Projection)],
    budgets: &MonthlyBudget,
    symbol: &str,
) -> String {
    if projections.is_empty() {
        return "No months in range.".to_string();
    }

    let rows = projections.iter().map(|(month, projection)| ProjectionRow {
        month: month.to_string(),
        income: projection.income.format_with_symbol(symbol),
        expenses: projection.expenses.format_with_symbol(symbol),
        balance: projection.balance.format_with_symbol(symbol),
        source: if budgets.contains_key(month) {
            "actual"
        } else {
            "projected"
        },
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format a category breakdown with a total line
pub fn format_breakdown(totals: &[CategoryTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "No transactions in this month.".to_string();
    }

    let total: Money = totals.iter().map(|c| c.amount).sum();
    let rows = totals.iter().map(|c| CategoryRow {
        category: c.category.clone(),
        amount: c.amount.format_with_symbol(symbol),
        share: format_percentage(c.percentage),
    });

    format!(
        "{}\nTotal: {}",
        Table::new(rows).with(Style::rounded()),
        total.format_with_symbol(symbol)
    )
}
