//! Display formatting for terminal output

pub mod ledger;
pub mod loan;

pub use ledger::{format_breakdown, format_ledger, format_projections};
pub use loan::format_loan_list;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

/// Format a date with a user-supplied strftime pattern
///
/// An invalid pattern falls back to `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return date.format("%Y-%m-%d").to_string();
    }
    date.format(pattern).to_string()
}

/// Format a percentage with precision that shrinks as the value grows
pub fn format_percentage(pct: f64) -> String {
    let magnitude = pct.abs();
    if magnitude > 0.0 && magnitude < 0.1 {
        format!("{:.2}%", pct)
    } else if magnitude < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}
