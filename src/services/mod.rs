//! Engine services for the rollover ledger
//!
//! Every function here takes an explicit input snapshot and returns a new
//! value; nothing holds state between calls or mutates its inputs.

pub mod ledger;
pub mod loan;
pub mod projection;
pub mod recurrence;
pub mod summary;

pub use ledger::{build_ledger, LedgerBuilder, MonthTotals};
pub use projection::{project, PlannedTotals, Projection, ProjectionEngine};
pub use recurrence::{applies_to, applies_to_ym, items_for_month};
pub use summary::{category_breakdown, percentage, savings_rate, CategoryTotal};
