//! Fund error types for validation, invariant, and state errors.
//!
//! This module defines all errors that can occur during fund ledger
//! operations, including entry validation errors, the non-negative balance
//! invariant, concurrency errors, and storage errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during fund ledger operations.
#[derive(Debug, Error)]
pub enum FundError {
    // ========== Validation Errors ==========
    /// Entry amount cannot be zero.
    #[error("Entry amount cannot be zero")]
    ZeroAmount,

    /// Entry amount cannot be negative.
    #[error("Entry amount cannot be negative")]
    NegativeAmount,

    /// Entry description is required.
    #[error("Entry description is required")]
    EmptyDescription,

    /// Currency code must be three ASCII letters.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    // ========== Invariant Errors ==========
    /// A decrease would drive the balance below zero.
    #[error("fund balance cannot be negative")]
    NegativeBalance {
        /// Balance before the rejected operation.
        balance: Decimal,
        /// Amount the rejected decrease asked for.
        attempted: Decimal,
    },

    // ========== State Errors ==========
    /// Fund record not found.
    #[error("Fund record not found")]
    NotFound,

    // ========== Concurrency Errors ==========
    /// Concurrent modification detected.
    #[error("Concurrent modification detected, please retry")]
    ConcurrentModification,

    // ========== Storage Errors ==========
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FundError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::NegativeBalance { .. } => "INVALID_OPERATION",
            Self::NotFound => "FUND_NOT_FOUND",
            Self::ConcurrentModification => "CONCURRENT_MODIFICATION",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation and invariant errors
            Self::ZeroAmount
            | Self::NegativeAmount
            | Self::EmptyDescription
            | Self::InvalidCurrency(_)
            | Self::NegativeBalance { .. } => 400,

            // 404 Not Found
            Self::NotFound => 404,

            // 409 Conflict - concurrency errors
            Self::ConcurrentModification => 409,

            // 500 Internal Server Error
            Self::Storage(_) => 500,
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConcurrentModification)
    }
}
