//! Shared types, errors, and configuration for Statera.
//!
//! This crate provides common types used across all other crates:
//! - Account number type used to key ledger balances and mappings
//! - Amount formatting for presentation
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::AccountNumber;
