//! Closing entry: rolls the period's net income into retained earnings.
//!
//! Retained earnings is credit-normal, so increasing it by net income makes
//! its `debit - credit` balance more negative. The entry is booked on a
//! working copy; the caller's trial balance is never touched.

use std::collections::HashSet;

use rust_decimal::Decimal;
use statera_shared::types::AccountNumber;

use crate::trial_balance::TrialBalance;

/// Result of applying the closing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingEntry {
    /// Working copy of the trial balance with net income closed.
    pub closed: TrialBalance,
    /// Combined retained earnings balance before closing.
    pub retained_earnings_before: Decimal,
    /// Combined retained earnings balance after closing.
    pub retained_earnings_after: Decimal,
    /// False when no row matched a retained earnings account.
    pub applied: bool,
}

impl ClosingEntry {
    /// Subtracts `net_income` from the combined balance of the retained
    /// earnings accounts in a copy of `trial_balance`.
    ///
    /// The adjustment is booked once, against the first matching row, so
    /// the combined balance moves by exactly `net_income` however many rows
    /// match. Without a matching row the copy is returned unchanged.
    #[must_use]
    pub fn apply(
        trial_balance: &TrialBalance,
        retained_earnings: &[AccountNumber],
        net_income: Decimal,
    ) -> Self {
        let mut closed = trial_balance.clone();
        let retained_earnings_before = closed.sum_for(retained_earnings);

        let wanted: HashSet<&AccountNumber> = retained_earnings.iter().collect();
        let target = closed
            .rows_mut()
            .iter_mut()
            .find(|row| wanted.contains(&row.account_number));

        let applied = match target {
            Some(row) => {
                row.balance -= net_income;
                true
            }
            None => false,
        };

        let retained_earnings_after = closed.sum_for(retained_earnings);

        Self {
            closed,
            retained_earnings_before,
            retained_earnings_after,
            applied,
        }
    }
}
