//! Trial balance: the flat ledger snapshot statements are built from.
//!
//! This module provides:
//! - Account balance rows (debit-positive, credit-negative)
//! - The balance table and its aggregation
//! - Debit/credit normal-balance sign conventions

pub mod aggregate;
pub mod balance;
pub mod normal;

pub use balance::{AccountBalance, TrialBalance};
pub use normal::NormalBalance;
