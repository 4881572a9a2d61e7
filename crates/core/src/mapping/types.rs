//! Typed mapping structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use statera_shared::types::AccountNumber;

use super::error::MappingError;
use super::{
    ASSETS, BALANCE_SHEET, EQUITY, EXPENSES, INCOME_STATEMENT, LIABILITIES, RETAINED_EARNINGS,
    REVENUE,
};
use crate::trial_balance::NormalBalance;

/// Statement section a line item rolls up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Income statement revenue.
    Revenue,
    /// Income statement expenses.
    Expenses,
    /// Balance sheet assets.
    Assets,
    /// Balance sheet liabilities.
    Liabilities,
    /// Balance sheet equity.
    Equity,
}

impl Section {
    /// Section name as it appears in mapping documents and statements.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Revenue => REVENUE,
            Self::Expenses => EXPENSES,
            Self::Assets => ASSETS,
            Self::Liabilities => LIABILITIES,
            Self::Equity => EQUITY,
        }
    }

    /// Statement the section belongs to.
    #[must_use]
    pub const fn statement(self) -> &'static str {
        match self {
            Self::Revenue | Self::Expenses => INCOME_STATEMENT,
            Self::Assets | Self::Liabilities | Self::Equity => BALANCE_SHEET,
        }
    }

    /// Normal balance of the accounts classified under this section.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Assets | Self::Expenses => NormalBalance::DebitNormal,
            Self::Liabilities | Self::Equity | Self::Revenue => NormalBalance::CreditNormal,
        }
    }
}

/// One line item and the accounts that feed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemMapping {
    /// Line item description (e.g. "Cash").
    pub name: String,
    /// Accounts in declared order, without repeats.
    pub accounts: Vec<AccountNumber>,
}

impl LineItemMapping {
    /// Creates a line item, dropping repeated accounts while keeping first-seen order.
    #[must_use]
    pub fn new<I, A>(name: impl Into<String>, accounts: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AccountNumber>,
    {
        let mut unique: Vec<AccountNumber> = Vec::new();
        for account in accounts {
            let account = account.into();
            if !unique.contains(&account) {
                unique.push(account);
            }
        }

        Self {
            name: name.into(),
            accounts: unique,
        }
    }
}

/// A balance sheet sub-section (e.g. "Current Assets") and its line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSectionMapping {
    /// Sub-section name.
    pub name: String,
    /// Line items in declared order.
    pub line_items: Vec<LineItemMapping>,
}

impl SubSectionMapping {
    /// Creates a sub-section.
    #[must_use]
    pub fn new(name: impl Into<String>, line_items: Vec<LineItemMapping>) -> Self {
        Self {
            name: name.into(),
            line_items,
        }
    }
}

/// Income statement classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementMapping {
    /// Revenue line items.
    pub revenue: Vec<LineItemMapping>,
    /// Expense line items.
    pub expenses: Vec<LineItemMapping>,
}

/// Balance sheet classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetMapping {
    /// Asset sub-sections.
    pub assets: Vec<SubSectionMapping>,
    /// Liability sub-sections.
    pub liabilities: Vec<SubSectionMapping>,
    /// Equity sub-sections.
    pub equity: Vec<SubSectionMapping>,
}

impl BalanceSheetMapping {
    /// Sub-sections of a balance sheet section; empty for income statement sections.
    #[must_use]
    pub fn sub_sections(&self, section: Section) -> &[SubSectionMapping] {
        match section {
            Section::Assets => &self.assets,
            Section::Liabilities => &self.liabilities,
            Section::Equity => &self.equity,
            Section::Revenue | Section::Expenses => &[],
        }
    }
}

/// Where a line item sits in the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingLocation {
    /// Section.
    pub section: Section,
    /// Balance sheet sub-section, if any.
    pub sub_section: Option<String>,
    /// Line item name.
    pub line_item: String,
}

impl std::fmt::Display for MappingLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} > {}", self.section.statement(), self.section.name())?;
        if let Some(sub_section) = &self.sub_section {
            write!(f, " > {sub_section}")?;
        }
        write!(f, " > {}", self.line_item)
    }
}

/// Complete mapping template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Income statement classification.
    pub income_statement: IncomeStatementMapping,
    /// Balance sheet classification.
    pub balance_sheet: BalanceSheetMapping,
}

impl Mapping {
    /// Creates a mapping and validates it.
    pub fn new(
        income_statement: IncomeStatementMapping,
        balance_sheet: BalanceSheetMapping,
    ) -> Result<Self, MappingError> {
        let mapping = Self {
            income_statement,
            balance_sheet,
        };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Returns true if the mapping classifies nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.income_statement.revenue.is_empty()
            && self.income_statement.expenses.is_empty()
            && self.balance_sheet.assets.is_empty()
            && self.balance_sheet.liabilities.is_empty()
            && self.balance_sheet.equity.is_empty()
    }

    /// Checks the invariants a build relies on.
    ///
    /// An empty mapping is valid. Any other mapping must name every
    /// sub-section and line item and must resolve "Retained Earnings".
    pub fn validate(&self) -> Result<(), MappingError> {
        if self.is_empty() {
            return Ok(());
        }

        for (section, items) in [
            (Section::Revenue, &self.income_statement.revenue),
            (Section::Expenses, &self.income_statement.expenses),
        ] {
            if items.iter().any(|item| item.name.trim().is_empty()) {
                return Err(MappingError::BlankName {
                    path: format!("{} > {}", section.statement(), section.name()),
                });
            }
        }

        for section in [Section::Assets, Section::Liabilities, Section::Equity] {
            for sub_section in self.balance_sheet.sub_sections(section) {
                let path = format!("{} > {}", section.statement(), section.name());
                if sub_section.name.trim().is_empty() {
                    return Err(MappingError::BlankName { path });
                }
                if sub_section
                    .line_items
                    .iter()
                    .any(|item| item.name.trim().is_empty())
                {
                    return Err(MappingError::BlankName {
                        path: format!("{path} > {}", sub_section.name),
                    });
                }
            }
        }

        self.retained_earnings_accounts().map(|_| ())
    }

    /// Accounts that receive the closing entry.
    ///
    /// Resolved as the first equity line item named "Retained Earnings";
    /// failing that, every account of an equity sub-section with that name.
    pub fn retained_earnings_accounts(&self) -> Result<Vec<AccountNumber>, MappingError> {
        let equity = &self.balance_sheet.equity;

        if let Some(item) = equity
            .iter()
            .flat_map(|sub| sub.line_items.iter())
            .find(|item| item.name == RETAINED_EARNINGS)
        {
            return Ok(item.accounts.clone());
        }

        equity
            .iter()
            .find(|sub| sub.name == RETAINED_EARNINGS)
            .map(|sub| {
                sub.line_items
                    .iter()
                    .flat_map(|item| item.accounts.iter().cloned())
                    .collect()
            })
            .ok_or(MappingError::MissingRetainedEarnings)
    }

    /// Every line item with its location, in presentation order.
    #[must_use]
    pub fn locations(&self) -> Vec<(MappingLocation, &LineItemMapping)> {
        let mut out = Vec::new();

        for (section, items) in [
            (Section::Revenue, &self.income_statement.revenue),
            (Section::Expenses, &self.income_statement.expenses),
        ] {
            for item in items {
                out.push((
                    MappingLocation {
                        section,
                        sub_section: None,
                        line_item: item.name.clone(),
                    },
                    item,
                ));
            }
        }

        for section in [Section::Assets, Section::Liabilities, Section::Equity] {
            for sub_section in self.balance_sheet.sub_sections(section) {
                for item in &sub_section.line_items {
                    out.push((
                        MappingLocation {
                            section,
                            sub_section: Some(sub_section.name.clone()),
                            line_item: item.name.clone(),
                        },
                        item,
                    ));
                }
            }
        }

        out
    }

    /// Every mapped account with the locations that claim it.
    #[must_use]
    pub fn account_index(&self) -> BTreeMap<&AccountNumber, Vec<MappingLocation>> {
        let mut index: BTreeMap<&AccountNumber, Vec<MappingLocation>> = BTreeMap::new();
        for (location, item) in self.locations() {
            for account in &item.accounts {
                index.entry(account).or_default().push(location.clone());
            }
        }
        index
    }
}
