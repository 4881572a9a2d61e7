//! Core statement logic for Statera.
//!
//! This crate contains pure business logic with ZERO file system or rendering dependencies.
//! It turns a trial balance and a mapping template into financial statements.
//!
//! # Modules
//!
//! - `trial_balance` - Account balances and signed aggregation
//! - `mapping` - Typed, validated mapping templates
//! - `statements` - Income statement, closing entry, balance sheet, diagnostics

pub mod mapping;
pub mod statements;
pub mod trial_balance;

pub use mapping::{Mapping, MappingError};
pub use statements::{
    BuildOptions, Diagnostic, FinancialStatements, LineItem, Statement, StatementError,
    StatementKind, StatementService, StatementSummary,
};
pub use trial_balance::{AccountBalance, TrialBalance};
