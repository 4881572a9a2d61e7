//! Findings reported alongside built statements.
//!
//! None of these stop a build. Each one points at a reason the balance
//! sheet may not balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use statera_shared::types::AccountNumber;
use tracing::warn;

use crate::mapping::Mapping;
use crate::trial_balance::TrialBalance;

/// A non-fatal finding about the inputs of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Trial balance account that no line item claims; excluded from every statement.
    UnmappedAccount {
        /// The account.
        account_number: AccountNumber,
        /// Its combined balance.
        balance: Decimal,
    },
    /// Account claimed by more than one line item; counted once per claim.
    DuplicateMapping {
        /// The account.
        account_number: AccountNumber,
        /// Every line item claiming it.
        locations: Vec<String>,
    },
    /// The trial balance does not sum to zero.
    TrialBalanceNotZero {
        /// Sum of all balances.
        total: Decimal,
    },
    /// No trial balance row matched the retained earnings accounts, so net
    /// income was not closed into equity.
    RetainedEarningsUnmatched {
        /// The retained earnings accounts from the mapping.
        accounts: Vec<AccountNumber>,
        /// Net income that could not be closed.
        net_income: Decimal,
    },
    /// Total assets differ from total liabilities and equity.
    OutOfBalance {
        /// Total assets.
        total_assets: Decimal,
        /// Total liabilities and equity.
        total_liabilities_and_equity: Decimal,
    },
}

impl Diagnostic {
    /// Emits the diagnostic as a `tracing` warning.
    pub fn log(&self) {
        match self {
            Self::UnmappedAccount {
                account_number,
                balance,
            } => warn!(account = %account_number, %balance, "Account is not mapped to any line item"),
            Self::DuplicateMapping {
                account_number,
                locations,
            } => warn!(account = %account_number, ?locations, "Account is mapped to several line items"),
            Self::TrialBalanceNotZero { total } => {
                warn!(%total, "Trial balance does not sum to zero");
            }
            Self::RetainedEarningsUnmatched {
                accounts,
                net_income,
            } => warn!(
                ?accounts,
                %net_income,
                "No trial balance row matches retained earnings; closing entry skipped"
            ),
            Self::OutOfBalance {
                total_assets,
                total_liabilities_and_equity,
            } => warn!(
                %total_assets,
                %total_liabilities_and_equity,
                "Balance sheet does not balance"
            ),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmappedAccount {
                account_number,
                balance,
            } => write!(
                f,
                "account {account_number} (balance {balance}) is not mapped to any line item"
            ),
            Self::DuplicateMapping {
                account_number,
                locations,
            } => write!(
                f,
                "account {account_number} is mapped to several line items: {}",
                locations.join("; ")
            ),
            Self::TrialBalanceNotZero { total } => {
                write!(f, "trial balance sums to {total}, not zero")
            }
            Self::RetainedEarningsUnmatched {
                accounts,
                net_income,
            } => write!(
                f,
                "no trial balance row matches retained earnings account(s) {}; net income {net_income} was not closed",
                accounts
                    .iter()
                    .map(AccountNumber::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::OutOfBalance {
                total_assets,
                total_liabilities_and_equity,
            } => write!(
                f,
                "total assets {total_assets} differ from total liabilities and equity {total_liabilities_and_equity}"
            ),
        }
    }
}

/// Accounts present in the trial balance that no line item claims, in
/// first-seen order with their combined balance.
#[must_use]
pub fn unmapped_accounts(trial_balance: &TrialBalance, mapping: &Mapping) -> Vec<Diagnostic> {
    let index = mapping.account_index();
    let mut found: Vec<(AccountNumber, Decimal)> = Vec::new();

    for row in trial_balance {
        if index.contains_key(&row.account_number) {
            continue;
        }
        match found.iter_mut().find(|(a, _)| *a == row.account_number) {
            Some((_, balance)) => *balance += row.balance,
            None => found.push((row.account_number.clone(), row.balance)),
        }
    }

    found
        .into_iter()
        .map(|(account_number, balance)| Diagnostic::UnmappedAccount {
            account_number,
            balance,
        })
        .collect()
}

/// Accounts claimed by more than one line item.
#[must_use]
pub fn duplicate_mappings(mapping: &Mapping) -> Vec<Diagnostic> {
    mapping
        .account_index()
        .into_iter()
        .filter(|(_, locations)| locations.len() > 1)
        .map(|(account, locations)| Diagnostic::DuplicateMapping {
            account_number: account.clone(),
            locations: locations.iter().map(ToString::to_string).collect(),
        })
        .collect()
}
