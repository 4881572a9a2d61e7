//! Account balance rows and the balance table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use statera_shared::types::AccountNumber;

/// Period-end balance of one ledger account.
///
/// `balance = debit - credit`: a pure debit account is positive, a pure
/// credit account is negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The account number.
    pub account_number: AccountNumber,
    /// Net balance (debit minus credit).
    pub balance: Decimal,
}

impl AccountBalance {
    /// Creates a row from a signed balance.
    #[must_use]
    pub fn new(account_number: impl Into<AccountNumber>, balance: Decimal) -> Self {
        Self {
            account_number: account_number.into(),
            balance,
        }
    }

    /// Creates a row from separate debit and credit totals.
    #[must_use]
    pub fn from_debit_credit(
        account_number: impl Into<AccountNumber>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self::new(account_number, debit - credit)
    }
}

/// The account balance table (trial balance).
///
/// Rows keep their input order. The same account may appear on several
/// rows; every row contributes to aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrialBalance {
    rows: Vec<AccountBalance>,
}

impl TrialBalance {
    /// Creates a trial balance from rows.
    #[must_use]
    pub fn new(rows: Vec<AccountBalance>) -> Self {
        Self { rows }
    }

    /// Returns the rows in input order.
    #[must_use]
    pub fn rows(&self) -> &[AccountBalance] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of every balance. Zero for a ledger that satisfies debits = credits.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.rows.iter().map(|row| row.balance).sum()
    }

    /// Returns true if the balances sum to zero.
    #[must_use]
    pub fn is_zero_sum(&self) -> bool {
        self.total().is_zero()
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, AccountBalance> {
        self.rows.iter()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [AccountBalance] {
        &mut self.rows
    }
}

impl FromIterator<AccountBalance> for TrialBalance {
    fn from_iter<T: IntoIterator<Item = AccountBalance>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TrialBalance {
    type Item = &'a AccountBalance;
    type IntoIter = std::slice::Iter<'a, AccountBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
