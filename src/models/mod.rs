//! Core data models for the rollover ledger
//!
//! Transactions, planned items, loans and the per-month budget entries the
//! engine produces from them.

pub mod budget;
pub mod date;
pub mod ids;
pub mod loan;
pub mod money;
pub mod month;
pub mod recurring;
pub mod transaction;

pub use budget::{MonthlyBudget, MonthlyBudgetEntry, RolloverSettings};
pub use ids::{FutureTransactionId, LoanId, PaymentId, TransactionId};
pub use loan::{Loan, LoanPayment, LoanStatus, LoanType};
pub use money::Money;
pub use month::{MonthKey, MonthKeyParseError};
pub use recurring::{Frequency, FutureTransaction};
pub use transaction::{Transaction, TransactionType};
