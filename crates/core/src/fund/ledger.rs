//! Balance arithmetic and input validation for the fund ledger.
//!
//! The engine computes the successor balance for an operation and enforces
//! the non-negative-balance invariant. It is pure: storage access and entry
//! construction stay with the caller.

use rust_decimal::Decimal;

use super::error::FundError;
use super::types::{FundPatch, NewHistoryEntry, OperationKind};

/// Synthesized effect of a direct balance overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceAdjustment {
    /// Direction of the synthesized entry.
    pub operation: OperationKind,
    /// Unsigned difference between the old and new balance.
    pub amount: Decimal,
}

/// Fund ledger engine.
///
/// All methods are pure functions over balances and inputs.
pub struct FundLedger;

impl FundLedger {
    /// Validates a new entry before any storage access.
    ///
    /// Checks run in order: zero amount, negative amount, blank description.
    ///
    /// # Errors
    ///
    /// Returns `FundError::ZeroAmount`, `FundError::NegativeAmount`, or
    /// `FundError::EmptyDescription` on the first failed check.
    pub fn validate_entry(entry: &NewHistoryEntry) -> Result<(), FundError> {
        if entry.amount == Decimal::ZERO {
            return Err(FundError::ZeroAmount);
        }
        if entry.amount < Decimal::ZERO {
            return Err(FundError::NegativeAmount);
        }
        if entry.description.trim().is_empty() {
            return Err(FundError::EmptyDescription);
        }
        Ok(())
    }

    /// Validates the cheap invariants of a fund patch.
    ///
    /// # Errors
    ///
    /// Returns `FundError::NegativeAmount` when the target balance is
    /// negative and `FundError::InvalidCurrency` when the currency code is
    /// malformed.
    pub fn validate_patch(patch: &FundPatch) -> Result<(), FundError> {
        if let Some(target) = patch.amount {
            if target < Decimal::ZERO {
                return Err(FundError::NegativeAmount);
            }
        }
        if let Some(code) = &patch.currency {
            Self::normalize_currency(code)?;
        }
        Ok(())
    }

    /// Computes the balance after applying one operation.
    ///
    /// An `increase` adds the amount and a `decrease` subtracts it; a
    /// `transfer` is recorded for audit only and returns the balance
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `FundError::NegativeBalance` when a decrease would drive the
    /// balance below zero. A decrease down to exactly zero is allowed.
    pub fn apply_operation(
        balance: Decimal,
        operation: OperationKind,
        amount: Decimal,
    ) -> Result<Decimal, FundError> {
        match operation {
            OperationKind::Increase => Ok(balance + amount),
            OperationKind::Decrease => {
                let next = balance - amount;
                if next < Decimal::ZERO {
                    return Err(FundError::NegativeBalance {
                        balance,
                        attempted: amount,
                    });
                }
                Ok(next)
            }
            OperationKind::Transfer => Ok(balance),
        }
    }

    /// Computes the synthesized history effect of overwriting the balance.
    ///
    /// Returns `None` when the target equals the current balance, so nothing
    /// gets recorded. The overwrite path has no decrease guard: an
    /// administrator may rewrite the balance downward freely, as long as the
    /// target itself is non-negative.
    ///
    /// # Errors
    ///
    /// Returns `FundError::NegativeAmount` when the target balance is negative.
    pub fn balance_patch(
        current: Decimal,
        target: Decimal,
    ) -> Result<Option<BalanceAdjustment>, FundError> {
        if target < Decimal::ZERO {
            return Err(FundError::NegativeAmount);
        }
        if target == current {
            return Ok(None);
        }

        let (operation, amount) = if target > current {
            (OperationKind::Increase, target - current)
        } else {
            (OperationKind::Decrease, current - target)
        };

        Ok(Some(BalanceAdjustment { operation, amount }))
    }

    /// Default description for a synthesized balance adjustment.
    #[must_use]
    pub fn adjustment_description(old: Decimal, new: Decimal) -> String {
        format!("Изменение суммы фонда с {old} до {new}")
    }

    /// Validates a currency code and normalizes it to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `FundError::InvalidCurrency` unless the code is exactly three
    /// ASCII letters.
    pub fn normalize_currency(code: &str) -> Result<String, FundError> {
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(code.to_ascii_uppercase())
        } else {
            Err(FundError::InvalidCurrency(code.to_string()))
        }
    }
}
