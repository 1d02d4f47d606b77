//! Fund domain types for the compensation fund ledger.
//!
//! This module defines the singleton fund record, its immutable history
//! entries, and the input and view types used by fund operations.

use chrono::{DateTime, Utc};
use kompfond_shared::types::{EntryId, PageRequest, PageResponse, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Operation kind recorded on a history entry.
///
/// Entries store an unsigned `amount`; the effect on the balance is derived
/// from the kind:
/// - `Increase` adds the amount (contribution, deposit)
/// - `Decrease` subtracts the amount (payout), rejected if the balance would go negative
/// - `Transfer` is recorded for audit but leaves the balance unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Deposit into the fund.
    Increase,
    /// Payout or withdrawal from the fund.
    Decrease,
    /// Balance-neutral movement between fund sub-accounts.
    Transfer,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Transfer => "transfer",
        };
        write!(f, "{kind}")
    }
}

/// Bank requisites of the fund account.
///
/// Free-form administrative metadata; nothing in the ledger depends on these
/// fields beyond storing and returning them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    /// Bank name.
    pub bank_name: Option<String>,
    /// Settlement account number.
    pub account_number: Option<String>,
    /// Bank identification code (БИК).
    pub bik: Option<String>,
    /// Correspondent account number.
    pub correspondent_account: Option<String>,
    /// Taxpayer identification number (ИНН).
    pub inn: Option<String>,
    /// Tax registration reason code (КПП).
    pub kpp: Option<String>,
}

/// One immutable entry in the fund history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique identifier, assigned on insertion.
    pub id: EntryId,
    /// Caller-supplied effective date of the operation. May differ from the
    /// insertion time, so views order by this field rather than insertion.
    pub date: DateTime<Utc>,
    /// Operation kind.
    pub operation: OperationKind,
    /// Positive amount; the sign of the effect comes from `operation`.
    pub amount: Decimal,
    /// Human-readable description of the operation.
    pub description: String,
    /// Optional reference to a supporting document in an external store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    /// Server-side insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// The singleton compensation fund record.
///
/// Exactly one record exists for the lifetime of the system. It is created
/// lazily on first access and then mutated in place; history entries are
/// appended and never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    /// Current balance in `currency` units; never negative.
    pub balance: Decimal,
    /// ISO 4217 currency code (e.g. "RUB").
    pub currency: String,
    /// Timestamp of the most recent mutation.
    pub last_updated: DateTime<Utc>,
    /// Bank requisites of the fund account.
    pub bank_details: BankDetails,
    /// Append-only operation history, in insertion order.
    pub history: Vec<HistoryEntry>,
    /// Actor that created the record.
    pub created_by: UserId,
    /// Actor of the most recent mutation.
    pub updated_by: UserId,
    /// Version token bumped by the store on every committed write.
    #[serde(default)]
    pub version: i64,
}

impl FundRecord {
    /// Creates the record used for the lazy singleton bootstrap: zero
    /// balance, empty history, system audit fields.
    #[must_use]
    pub fn initial(currency: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            balance: Decimal::ZERO,
            currency: currency.into(),
            last_updated: now,
            bank_details: BankDetails::default(),
            history: Vec::new(),
            created_by: UserId::system(),
            updated_by: UserId::system(),
            version: 0,
        }
    }
}

/// Input for recording a new history entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryEntry {
    /// Effective date of the operation.
    pub date: DateTime<Utc>,
    /// Operation kind.
    pub operation: OperationKind,
    /// Positive amount.
    pub amount: Decimal,
    /// Description of the operation.
    pub description: String,
    /// Optional supporting document reference.
    pub document_url: Option<String>,
}

/// Partial update of the fund's non-ledger fields.
///
/// A present `amount` overwrites the balance directly and synthesizes a
/// derived history entry for the difference. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundPatch {
    /// New balance, overwriting the current one.
    pub amount: Option<Decimal>,
    /// New currency code.
    pub currency: Option<String>,
    /// New bank requisites, replacing the current set wholesale.
    pub bank_details: Option<BankDetails>,
    /// Description for the synthesized balance-adjustment entry.
    pub description: Option<String>,
}

/// Filter and paging parameters for the history view.
///
/// All filters are optional and combine with AND; date bounds are inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilter {
    /// Keep entries with `date >= start_date`.
    pub start_date: Option<DateTime<Utc>>,
    /// Keep entries with `date <= end_date`.
    pub end_date: Option<DateTime<Utc>>,
    /// Keep entries with this operation kind.
    pub operation: Option<OperationKind>,
    /// Page request (1-indexed page, page size).
    #[serde(flatten)]
    pub page: PageRequest,
}

/// One page of history entries with pagination metadata.
pub type HistoryPage = PageResponse<HistoryEntry>;

/// Summary of the fund derived from its full history.
///
/// Recomputed from the history on every read; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundStatistics {
    /// Current balance.
    pub current_amount: Decimal,
    /// Fund currency code.
    pub currency: String,
    /// Timestamp of the most recent fund mutation.
    pub last_updated: DateTime<Utc>,
    /// Sum of all `increase` amounts.
    pub total_increase: Decimal,
    /// Sum of all `decrease` amounts.
    pub total_decrease: Decimal,
    /// Sum of all `transfer` amounts.
    pub total_transfers: Decimal,
    /// Sum of `increase` amounts dated within the last calendar month.
    pub last_month_increase: Decimal,
    /// Sum of `decrease` amounts dated within the last calendar month.
    pub last_month_decrease: Decimal,
    /// Number of history entries.
    pub total_operations: u64,
    /// Number of history entries dated within the last calendar month.
    pub last_month_operations: u64,
}
