//! Income statement builder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{LineItem, Statement, StatementKind};
use crate::mapping::{IncomeStatementMapping, LineItemMapping, Section};
use crate::trial_balance::TrialBalance;

/// Totals computed while building the income statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementTotals {
    /// Total revenue (presentation sign, positive for income).
    pub total_revenue: Decimal,
    /// Total expenses (presentation sign, positive for costs).
    pub total_expenses: Decimal,
    /// Total revenue - total expenses.
    pub net_income: Decimal,
}

/// Builds the income statement.
pub struct IncomeStatementBuilder;

impl IncomeStatementBuilder {
    /// Builds the income statement and returns it with its totals.
    ///
    /// Row order is fixed: Revenue header, revenue lines, Total Revenue,
    /// Expenses header, expense lines, Total Expenses, Net Income. Lines whose
    /// accounts sum to zero are still emitted.
    #[must_use]
    pub fn build(
        trial_balance: &TrialBalance,
        mapping: &IncomeStatementMapping,
    ) -> (Statement, IncomeStatementTotals) {
        let mut lines = Vec::with_capacity(mapping.revenue.len() + mapping.expenses.len() + 5);

        let total_revenue =
            Self::section(&mut lines, trial_balance, Section::Revenue, &mapping.revenue);
        let total_expenses =
            Self::section(&mut lines, trial_balance, Section::Expenses, &mapping.expenses);

        let net_income = total_revenue - total_expenses;
        lines.push(LineItem::final_total("Net Income", net_income));

        (
            Statement::new(StatementKind::IncomeStatement, lines),
            IncomeStatementTotals {
                total_revenue,
                total_expenses,
                net_income,
            },
        )
    }

    /// Emits one section and returns its presentation total.
    fn section(
        lines: &mut Vec<LineItem>,
        trial_balance: &TrialBalance,
        section: Section,
        items: &[LineItemMapping],
    ) -> Decimal {
        let normal = section.normal_balance();
        lines.push(LineItem::header(section.name()));

        let mut total = Decimal::ZERO;
        for item in items {
            let amount = normal.present(trial_balance.sum_for(&item.accounts));
            total += amount;
            lines.push(LineItem::detail(item.name.clone(), amount));
        }

        lines.push(LineItem::total(format!("Total {}", section.name()), total));
        total
    }
}
