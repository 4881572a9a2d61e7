//! Debit/credit normal balances and presentation signs.
//!
//! Balances are stored as debit minus credit:
//! - Asset/Expense accounts are debit-normal (positive when healthy)
//! - Liability/Equity/Revenue accounts are credit-normal (negative when healthy)
//!
//! Statements present both kinds as positive figures, so credit-normal
//! sums are negated for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The side an account class normally carries its balance on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, Expense)
    DebitNormal,
    /// Credit-normal accounts (Liability, Equity, Revenue)
    CreditNormal,
}

impl NormalBalance {
    /// Multiplier that turns a `debit - credit` balance into a presentation figure.
    #[must_use]
    pub const fn presentation_sign(self) -> Decimal {
        match self {
            Self::DebitNormal => Decimal::ONE,
            Self::CreditNormal => Decimal::NEGATIVE_ONE,
        }
    }

    /// Converts a ledger balance into its presentation figure.
    #[must_use]
    pub fn present(self, balance: Decimal) -> Decimal {
        balance * self.presentation_sign()
    }
}
