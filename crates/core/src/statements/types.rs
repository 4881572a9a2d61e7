//! Statement data types.
//!
//! These are the types handed to renderers. A `Statement` is assembled once
//! by its builder and is read-only afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::diagnostics::Diagnostic;

/// Statement name of the income statement.
pub const INCOME_STATEMENT_NAME: &str = "Income Statement";
/// Statement name of the balance sheet.
pub const BALANCE_SHEET_NAME: &str = "Balance Sheet";
/// Statement name of the cash flow statement.
pub const CASH_FLOW_STATEMENT_NAME: &str = "Cash Flow Statement";

/// One presentation row of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Row label.
    pub description: String,
    /// Presentation amount; absent for headers and notes.
    pub amount: Option<Decimal>,
    /// Indentation level: 0 for headers and totals, 1 for detail lines.
    pub level: u8,
    /// Section or sub-section header.
    pub is_header: bool,
    /// Sub-total or total.
    pub is_total: bool,
    /// Grand total closing a statement block (Net Income, Total Assets, ...).
    pub is_final_total: bool,
}

impl LineItem {
    /// Section header without an amount.
    #[must_use]
    pub fn header(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            level: 0,
            is_header: true,
            is_total: false,
            is_final_total: false,
        }
    }

    /// Detail line for a mapped line item.
    #[must_use]
    pub fn detail(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            level: 1,
            is_header: false,
            is_total: false,
            is_final_total: false,
        }
    }

    /// Sub-total row.
    #[must_use]
    pub fn total(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            level: 0,
            is_header: false,
            is_total: true,
            is_final_total: false,
        }
    }

    /// Grand total row.
    #[must_use]
    pub fn final_total(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            is_final_total: true,
            ..Self::total(description, amount)
        }
    }

    /// Informational row without an amount.
    #[must_use]
    pub fn note(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            level: 0,
            is_header: false,
            is_total: false,
            is_final_total: false,
        }
    }
}

/// Kind of financial statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Income statement (profit and loss).
    IncomeStatement,
    /// Balance sheet (statement of financial position).
    BalanceSheet,
    /// Cash flow statement.
    CashFlow,
}

impl StatementKind {
    /// Display name of the statement.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IncomeStatement => INCOME_STATEMENT_NAME,
            Self::BalanceSheet => BALANCE_SHEET_NAME,
            Self::CashFlow => CASH_FLOW_STATEMENT_NAME,
        }
    }
}

/// An ordered sequence of line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    name: String,
    kind: StatementKind,
    supported: bool,
    lines: Vec<LineItem>,
}

impl Statement {
    /// Creates a computed statement.
    #[must_use]
    pub fn new(kind: StatementKind, lines: Vec<LineItem>) -> Self {
        Self {
            name: kind.name().to_string(),
            kind,
            supported: true,
            lines,
        }
    }

    /// Creates a placeholder for a statement that cannot be computed.
    #[must_use]
    pub fn unsupported(kind: StatementKind, note: impl Into<String>) -> Self {
        Self {
            name: kind.name().to_string(),
            kind,
            supported: false,
            lines: vec![LineItem::note(note)],
        }
    }

    /// Statement name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Statement kind.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    /// False for placeholders that renderers must skip.
    #[must_use]
    pub const fn supported(&self) -> bool {
        self.supported
    }

    /// Line items in presentation order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// First line with the given description.
    #[must_use]
    pub fn line(&self, description: &str) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.description == description)
    }

    /// Amount of the first line with the given description.
    #[must_use]
    pub fn amount_of(&self, description: &str) -> Option<Decimal> {
        self.line(description).and_then(|l| l.amount)
    }
}

/// Headline figures of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSummary {
    /// Total revenue (presentation sign).
    pub total_revenue: Decimal,
    /// Total expenses (presentation sign).
    pub total_expenses: Decimal,
    /// Net income (total revenue - total expenses).
    pub net_income: Decimal,
    /// Combined retained earnings ledger balance before the closing entry.
    pub retained_earnings_before: Decimal,
    /// Combined retained earnings ledger balance after the closing entry.
    pub retained_earnings_after: Decimal,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total equity, including the closed net income.
    pub total_equity: Decimal,
    /// Total liabilities plus total equity.
    pub total_liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity.
    pub is_balanced: bool,
}

/// Ordered output of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialStatements {
    statements: Vec<Statement>,
    summary: Option<StatementSummary>,
    diagnostics: Vec<Diagnostic>,
}

impl FinancialStatements {
    /// Creates the output of a build.
    #[must_use]
    pub fn new(
        statements: Vec<Statement>,
        summary: Option<StatementSummary>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            statements,
            summary,
            diagnostics,
        }
    }

    /// "Nothing to report": no statements, no summary.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no statement was built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements in presentation order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Statements renderers should display.
    pub fn supported(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().filter(|s| s.supported())
    }

    /// Statement by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Statement> {
        self.statements.iter().find(|s| s.name() == name)
    }

    /// Statement by kind.
    #[must_use]
    pub fn by_kind(&self, kind: StatementKind) -> Option<&Statement> {
        self.statements.iter().find(|s| s.kind() == kind)
    }

    /// Headline figures; `None` for an empty build.
    #[must_use]
    pub const fn summary(&self) -> Option<&StatementSummary> {
        self.summary.as_ref()
    }

    /// Findings that did not stop the build.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
