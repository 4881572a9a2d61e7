//! Conversion from JSON mapping documents.
//!
//! Document shape:
//!
//! ```text
//! {
//!   "Income Statement": {
//!     "Revenue":  { "<line item>": ["<account>", ...], ... },
//!     "Expenses": { "<line item>": ["<account>", ...], ... }
//!   },
//!   "Balance Sheet": {
//!     "Assets":      { "<sub-section>": { "<line item>": ["<account>", ...] } },
//!     "Liabilities": { ... },
//!     "Equity":      { ... "Retained Earnings" ... }
//!   }
//! }
//! ```
//!
//! Key order is presentation order. Account numbers may be strings or
//! non-negative integers.

use serde_json::{Map, Value};
use statera_shared::types::AccountNumber;
use tracing::warn;

use super::error::MappingError;
use super::types::{
    BalanceSheetMapping, IncomeStatementMapping, LineItemMapping, Mapping, SubSectionMapping,
};
use super::{ASSETS, BALANCE_SHEET, EQUITY, EXPENSES, INCOME_STATEMENT, LIABILITIES, REVENUE};

const ROOT: &str = "mapping";

impl Mapping {
    /// Parses and validates a JSON mapping document.
    pub fn from_json_str(json: &str) -> Result<Self, MappingError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| MappingError::InvalidJson(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Converts and validates a JSON mapping document.
    ///
    /// `null` and `{}` produce an empty mapping. A document that names the
    /// statements but leaves every section empty is rejected with
    /// `MissingRetainedEarnings`.
    pub fn from_value(value: &Value) -> Result<Self, MappingError> {
        if value.is_null() {
            return Ok(Self::default());
        }

        let root = as_object(value, ROOT)?;
        if root.is_empty() {
            return Ok(Self::default());
        }

        for key in root.keys() {
            if key != INCOME_STATEMENT && key != BALANCE_SHEET {
                warn!(key = %key, "Ignoring unknown statement in mapping");
            }
        }

        let income = as_object(required(root, INCOME_STATEMENT, ROOT)?, INCOME_STATEMENT)?;
        warn_unknown(income, INCOME_STATEMENT, &[REVENUE, EXPENSES]);

        let income_statement = IncomeStatementMapping {
            revenue: line_items(
                required(income, REVENUE, INCOME_STATEMENT)?,
                &[INCOME_STATEMENT, REVENUE],
            )?,
            expenses: line_items(
                required(income, EXPENSES, INCOME_STATEMENT)?,
                &[INCOME_STATEMENT, EXPENSES],
            )?,
        };

        let balance = as_object(required(root, BALANCE_SHEET, ROOT)?, BALANCE_SHEET)?;
        warn_unknown(balance, BALANCE_SHEET, &[ASSETS, LIABILITIES, EQUITY]);

        let balance_sheet = BalanceSheetMapping {
            assets: sub_sections(required(balance, ASSETS, BALANCE_SHEET)?, ASSETS)?,
            liabilities: sub_sections(
                required(balance, LIABILITIES, BALANCE_SHEET)?,
                LIABILITIES,
            )?,
            equity: sub_sections(required(balance, EQUITY, BALANCE_SHEET)?, EQUITY)?,
        };

        // Only `null` and `{}` count as empty documents; anything else must
        // resolve retained earnings even when every section is empty.
        let mapping = Self::new(income_statement, balance_sheet)?;
        mapping.retained_earnings_accounts()?;
        Ok(mapping)
    }
}

fn join(parts: &[&str]) -> String {
    parts.join(" > ")
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, MappingError> {
    value.as_object().ok_or_else(|| MappingError::InvalidType {
        path: path.to_string(),
        expected: "an object",
    })
}

fn required<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Value, MappingError> {
    object.get(key).ok_or_else(|| MappingError::MissingKey {
        path: path.to_string(),
        key: key.to_string(),
    })
}

fn warn_unknown(object: &Map<String, Value>, path: &str, known: &[&str]) {
    for key in object.keys() {
        if !known.contains(&key.as_str()) {
            warn!(path, key = %key, "Ignoring unknown section in mapping");
        }
    }
}

fn line_items(value: &Value, path: &[&str]) -> Result<Vec<LineItemMapping>, MappingError> {
    let object = as_object(value, &join(path))?;

    object
        .iter()
        .map(|(name, accounts)| {
            if name.trim().is_empty() {
                return Err(MappingError::BlankName { path: join(path) });
            }
            let mut item_path = path.to_vec();
            item_path.push(name.as_str());
            Ok(LineItemMapping::new(name.clone(), account_list(accounts, &join(&item_path))?))
        })
        .collect()
}

fn sub_sections(value: &Value, section: &str) -> Result<Vec<SubSectionMapping>, MappingError> {
    let path = join(&[BALANCE_SHEET, section]);
    let object = as_object(value, &path)?;

    object
        .iter()
        .map(|(name, items)| {
            if name.trim().is_empty() {
                return Err(MappingError::BlankName { path: path.clone() });
            }
            let items = line_items(items, &[BALANCE_SHEET, section, name.as_str()])?;
            Ok(SubSectionMapping::new(name.clone(), items))
        })
        .collect()
}

fn account_list(value: &Value, path: &str) -> Result<Vec<AccountNumber>, MappingError> {
    let entries = value.as_array().ok_or_else(|| MappingError::InvalidType {
        path: path.to_string(),
        expected: "a list of account numbers",
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let account = match entry {
                Value::String(s) => AccountNumber::new(s),
                Value::Number(n) => n.as_u64().map(AccountNumber::from).ok_or_else(|| {
                    MappingError::InvalidAccount {
                        path: path.to_string(),
                        index,
                    }
                })?,
                _ => {
                    return Err(MappingError::InvalidAccount {
                        path: path.to_string(),
                        index,
                    });
                }
            };

            if account.is_empty() {
                return Err(MappingError::InvalidAccount {
                    path: path.to_string(),
                    index,
                });
            }
            Ok(account)
        })
        .collect()
}
