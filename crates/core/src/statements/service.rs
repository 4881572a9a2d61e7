//! Statement generation service.

use statera_shared::config::{ReportConfig, UnmappedPolicy};
use tracing::debug;

use super::balance_sheet::BalanceSheetBuilder;
use super::cash_flow;
use super::closing::ClosingEntry;
use super::diagnostics::{self, Diagnostic};
use super::error::StatementError;
use super::income::IncomeStatementBuilder;
use super::types::{FinancialStatements, StatementSummary};
use crate::mapping::Mapping;
use crate::trial_balance::TrialBalance;

/// Options controlling a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Handling of trial balance accounts no line item claims.
    pub unmapped: UnmappedPolicy,
}

impl From<&ReportConfig> for BuildOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            unmapped: config.unmapped,
        }
    }
}

/// Service for generating financial statements.
///
/// Every build is a pure function of its inputs: the trial balance is only
/// read, the closing entry is booked on a private copy, and nothing is
/// shared between calls.
pub struct StatementService;

impl StatementService {
    /// Builds the statements with default options.
    pub fn build(
        trial_balance: &TrialBalance,
        mapping: &Mapping,
    ) -> Result<FinancialStatements, StatementError> {
        Self::build_with(trial_balance, mapping, &BuildOptions::default())
    }

    /// Builds the income statement, the balance sheet and the cash flow placeholder.
    ///
    /// The mapping is validated before any aggregation. An empty trial
    /// balance or an empty mapping yields an empty result.
    pub fn build_with(
        trial_balance: &TrialBalance,
        mapping: &Mapping,
        options: &BuildOptions,
    ) -> Result<FinancialStatements, StatementError> {
        mapping.validate()?;

        if trial_balance.is_empty() || mapping.is_empty() {
            debug!(
                rows = trial_balance.len(),
                mapping_empty = mapping.is_empty(),
                "Nothing to report"
            );
            return Ok(FinancialStatements::empty());
        }

        let mut findings = Self::check_inputs(trial_balance, mapping, options)?;

        let (income_statement, income) =
            IncomeStatementBuilder::build(trial_balance, &mapping.income_statement);
        debug!(
            total_revenue = %income.total_revenue,
            total_expenses = %income.total_expenses,
            net_income = %income.net_income,
            "Income statement built"
        );

        let retained_earnings = mapping.retained_earnings_accounts()?;
        let closing = ClosingEntry::apply(trial_balance, &retained_earnings, income.net_income);
        if closing.applied {
            debug!(
                before = %closing.retained_earnings_before,
                after = %closing.retained_earnings_after,
                "Closing entry applied"
            );
        } else if !income.net_income.is_zero() {
            findings.push(Diagnostic::RetainedEarningsUnmatched {
                accounts: retained_earnings,
                net_income: income.net_income,
            });
        }

        let (balance_sheet, totals) =
            BalanceSheetBuilder::build(&closing.closed, &mapping.balance_sheet);
        if !totals.is_balanced() {
            findings.push(Diagnostic::OutOfBalance {
                total_assets: totals.total_assets,
                total_liabilities_and_equity: totals.total_liabilities_and_equity,
            });
        }

        for finding in &findings {
            finding.log();
        }

        let summary = StatementSummary {
            total_revenue: income.total_revenue,
            total_expenses: income.total_expenses,
            net_income: income.net_income,
            retained_earnings_before: closing.retained_earnings_before,
            retained_earnings_after: closing.retained_earnings_after,
            total_assets: totals.total_assets,
            total_liabilities: totals.total_liabilities,
            total_equity: totals.total_equity,
            total_liabilities_and_equity: totals.total_liabilities_and_equity,
            is_balanced: totals.is_balanced(),
        };

        Ok(FinancialStatements::new(
            vec![income_statement, balance_sheet, cash_flow::placeholder()],
            Some(summary),
            findings,
        ))
    }

    /// Collects input findings, failing on unmapped accounts under `Deny`.
    fn check_inputs(
        trial_balance: &TrialBalance,
        mapping: &Mapping,
        options: &BuildOptions,
    ) -> Result<Vec<Diagnostic>, StatementError> {
        let mut findings = Vec::new();

        let unmapped = diagnostics::unmapped_accounts(trial_balance, mapping);
        match options.unmapped {
            UnmappedPolicy::Ignore => {}
            UnmappedPolicy::Warn => findings.extend(unmapped),
            UnmappedPolicy::Deny if unmapped.is_empty() => {}
            UnmappedPolicy::Deny => {
                let accounts = unmapped
                    .into_iter()
                    .filter_map(|d| match d {
                        Diagnostic::UnmappedAccount { account_number, .. } => Some(account_number),
                        _ => None,
                    })
                    .collect();
                return Err(StatementError::UnmappedAccounts(accounts));
            }
        }

        findings.extend(diagnostics::duplicate_mappings(mapping));

        let total = trial_balance.total();
        if !total.is_zero() {
            findings.push(Diagnostic::TrialBalanceNotZero { total });
        }

        Ok(findings)
    }
}
