//! Recurrence rules for planned items
//!
//! Decides whether a planned item produces an occurrence in a given month.

use chrono::Datelike;

use crate::models::{Frequency, FutureTransaction, MonthKey};

/// Does `item` apply to `month`?
///
/// Items without a readable start date never apply, nor do items starting
/// after the month or ending before it. Past
/// that boundary check the frequency decides: one-time items apply in their
/// start month only, monthly items in every month, quarterly items every
/// third month counted from the start month, and yearly items in the start
/// month-of-year from the start year on. Unrecognized frequencies never
/// apply.
pub fn applies_to(item: &FutureTransaction, month: MonthKey) -> bool {
    let Some(start_date) = item.start_date else {
        return false;
    };
    if start_date > month.last_day() {
        return false;
    }
    if let Some(end) = item.end_date {
        if end < month.first_day() {
            return false;
        }
    }

    let start = MonthKey::from_date(start_date);
    match &item.frequency {
        Frequency::OneTime => start == month,
        Frequency::Monthly => true,
        Frequency::Quarterly => {
            let months_since_start = start.months_until(month);
            months_since_start >= 0 && months_since_start % 3 == 0
        }
        Frequency::Yearly => {
            month.year() >= start_date.year() && month.month0() == start_date.month0()
        }
        Frequency::Unrecognized(_) => false,
    }
}

/// `applies_to` for a raw year and 1-based month; an invalid month never matches
pub fn applies_to_ym(item: &FutureTransaction, year: i32, month: u32) -> bool {
    MonthKey::new(year, month)
        .map(|key| applies_to(item, key))
        .unwrap_or(false)
}

/// The planned items that apply to `month`, in input order
pub fn items_for_month(items: &[FutureTransaction], month: MonthKey) -> Vec<&FutureTransaction> {
    items.iter().filter(|item| applies_to(item, month)).collect()
}
