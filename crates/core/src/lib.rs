//! Core business logic for Kompfond.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `fund` - Compensation fund ledger: record, history, statistics

pub mod fund;
