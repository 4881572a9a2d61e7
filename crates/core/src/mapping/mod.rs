//! Mapping templates: how ledger accounts roll up into statement line items.
//!
//! A mapping is a three-level classification
//! `statement -> section -> line item -> accounts`, with balance sheet
//! sections carrying one extra sub-section level. Documents are converted
//! into typed structures and validated eagerly, so a build never starts
//! against an incomplete template.

pub mod document;
pub mod error;
pub mod types;


pub use error::MappingError;
pub use types::{
    BalanceSheetMapping, IncomeStatementMapping, LineItemMapping, Mapping, MappingLocation,
    Section, SubSectionMapping,
};

/// Top-level key of the income statement.
pub const INCOME_STATEMENT: &str = "Income Statement";
/// Top-level key of the balance sheet.
pub const BALANCE_SHEET: &str = "Balance Sheet";
/// Income statement revenue section.
pub const REVENUE: &str = "Revenue";
/// Income statement expense section.
pub const EXPENSES: &str = "Expenses";
/// Balance sheet asset section.
pub const ASSETS: &str = "Assets";
/// Balance sheet liability section.
pub const LIABILITIES: &str = "Liabilities";
/// Balance sheet equity section.
pub const EQUITY: &str = "Equity";
/// Equity line item (or sub-section) that receives the closing entry.
pub const RETAINED_EARNINGS: &str = "Retained Earnings";
