//! Financial statement generation.
//!
//! This module provides pure business logic for building statements from a
//! trial balance and a mapping:
//! - Income Statement
//! - Closing entry into retained earnings
//! - Balance Sheet
//! - Cash Flow Statement placeholder
//! - Build diagnostics

pub mod balance_sheet;
pub mod cash_flow;
pub mod closing;
pub mod diagnostics;
pub mod error;
pub mod income;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use balance_sheet::{BalanceSheetBuilder, BalanceSheetTotals};
pub use cash_flow::CASH_FLOW_PLACEHOLDER;
pub use closing::ClosingEntry;
pub use diagnostics::Diagnostic;
pub use error::StatementError;
pub use income::{IncomeStatementBuilder, IncomeStatementTotals};
pub use service::{BuildOptions, StatementService};
pub use types::*;
