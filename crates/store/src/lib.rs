//! Fund record store and service orchestration.
//!
//! This crate provides:
//! - The `FundRepository` port the persistence layer implements
//! - An in-memory adapter for tests and local development
//! - `FundService`, the operation surface callers talk to

pub mod memory;
pub mod repository;
pub mod service;

pub use memory::InMemoryFundRepository;
pub use repository::FundRepository;
pub use service::FundService;
