//! Configuration module for the rollover ledger
//!
//! - Platform path resolution
//! - User settings persistence, including the rollover policy

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
