//! Signed sums over sets of accounts.

use std::collections::HashSet;

use rust_decimal::Decimal;
use statera_shared::types::AccountNumber;

use super::balance::TrialBalance;

impl TrialBalance {
    /// Sums the balance of every row whose account is in `accounts`.
    ///
    /// Accounts without a row contribute zero, so an empty or unmatched set
    /// yields zero. `accounts` is treated as a set: listing an account twice
    /// does not count its rows twice.
    #[must_use]
    pub fn sum_for<'a, I>(&self, accounts: I) -> Decimal
    where
        I: IntoIterator<Item = &'a AccountNumber>,
    {
        let wanted: HashSet<&AccountNumber> = accounts.into_iter().collect();
        if wanted.is_empty() {
            return Decimal::ZERO;
        }

        self.iter()
            .filter(|row| wanted.contains(&row.account_number))
            .map(|row| row.balance)
            .sum()
    }
}
