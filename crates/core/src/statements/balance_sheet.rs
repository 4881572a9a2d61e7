//! Balance sheet builder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{LineItem, Statement, StatementKind};
use crate::mapping::{BalanceSheetMapping, Section};
use crate::trial_balance::TrialBalance;

/// Totals computed while building the balance sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetTotals {
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total equity.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub total_liabilities_and_equity: Decimal,
}

impl BalanceSheetTotals {
    /// Whether assets equal liabilities plus equity.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_assets == self.total_liabilities_and_equity
    }
}

/// Builds the balance sheet.
pub struct BalanceSheetBuilder;

impl BalanceSheetBuilder {
    /// Builds the balance sheet from a trial balance that already carries
    /// the closing entry.
    ///
    /// Sections come in the order Assets, Liabilities, Equity; sub-sections
    /// and line items follow the mapping. Assets are presented as stored,
    /// liabilities and equity with the sign flipped.
    #[must_use]
    pub fn build(
        closed: &TrialBalance,
        mapping: &BalanceSheetMapping,
    ) -> (Statement, BalanceSheetTotals) {
        let mut lines = Vec::new();

        let total_assets = Self::section(&mut lines, closed, mapping, Section::Assets);
        lines.push(LineItem::final_total("Total Assets", total_assets));

        let total_liabilities = Self::section(&mut lines, closed, mapping, Section::Liabilities);
        let total_equity = Self::section(&mut lines, closed, mapping, Section::Equity);

        let total_liabilities_and_equity = total_liabilities + total_equity;
        lines.push(LineItem::final_total(
            "Total Liabilities and Equity",
            total_liabilities_and_equity,
        ));

        (
            Statement::new(StatementKind::BalanceSheet, lines),
            BalanceSheetTotals {
                total_assets,
                total_liabilities,
                total_equity,
                total_liabilities_and_equity,
            },
        )
    }

    /// Emits every sub-section of `section` and returns the section total.
    fn section(
        lines: &mut Vec<LineItem>,
        closed: &TrialBalance,
        mapping: &BalanceSheetMapping,
        section: Section,
    ) -> Decimal {
        let normal = section.normal_balance();
        let mut section_total = Decimal::ZERO;

        for sub_section in mapping.sub_sections(section) {
            lines.push(LineItem::header(sub_section.name.clone()));

            let mut sub_total = Decimal::ZERO;
            for item in &sub_section.line_items {
                let amount = normal.present(closed.sum_for(&item.accounts));
                sub_total += amount;
                lines.push(LineItem::detail(item.name.clone(), amount));
            }

            lines.push(LineItem::total(format!("Total {}", sub_section.name), sub_total));
            section_total += sub_total;
        }

        section_total
    }
}
