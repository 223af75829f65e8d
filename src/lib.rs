//! Rollover Ledger - monthly budget ledger with balance carry-over
//!
//! This library rebuilds a month-by-month ledger from raw transactions,
//! carrying each month's ending balance into the next, projects balances
//! for future months from recurring planned items, and tracks personal
//! loans through a status state machine.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, transactions, loans, etc.)
//! - `services`: Ledger building, recurrence, projection and loan logic
//! - `snapshot`: Loading a ledger state from JSON or YAML
//! - `export`: Writing a built ledger as JSON, YAML or CSV
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use rollover_ledger::models::RolloverSettings;
//! use rollover_ledger::services::LedgerBuilder;
//! use rollover_ledger::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::load(path)?;
//! let settings = RolloverSettings::default();
//! let budgets = LedgerBuilder::new(&settings, today).build(&snapshot.transactions, &snapshot.budgets);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod snapshot;

pub use error::{LedgerError, LedgerResult};
