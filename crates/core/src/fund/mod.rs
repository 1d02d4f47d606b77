//! Compensation fund ledger logic.
//!
//! This module implements the core fund functionality:
//! - The singleton fund record and its audit history
//! - Balance arithmetic and the non-negative-balance invariant
//! - History filtering, ordering, and pagination
//! - Statistics derived from the history
//! - Error types for fund operations

pub mod error;
pub mod history;
pub mod ledger;
pub mod statistics;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::FundError;
pub use history::{page_history, recent_history};
pub use ledger::{BalanceAdjustment, FundLedger};
pub use statistics::compute_statistics;
pub use types::{
    BankDetails, FundPatch, FundRecord, FundStatistics, HistoryEntry, HistoryFilter, HistoryPage,
    NewHistoryEntry, OperationKind,
};
