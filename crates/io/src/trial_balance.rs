//! Trial balance CSV loader.
//!
//! Accepts either a signed `balance` column or separate debit and credit
//! columns, in which case the balance is `debit - credit`. Header names are
//! matched after normalisation, so "Account ID" and "Debit Amt." work.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use statera_core::{AccountBalance, TrialBalance};
use tracing::{debug, info};

use crate::error::LoadError;

const ACCOUNT_COLUMNS: [&str; 2] = ["account_number", "account_id"];
const BALANCE_COLUMN: &str = "balance";
const DEBIT_COLUMNS: [&str; 2] = ["debit_amt", "debit"];
const CREDIT_COLUMNS: [&str; 2] = ["credit_amt", "credit"];

/// Where the signed balance of a row comes from.
#[derive(Debug, Clone, Copy)]
enum AmountColumns {
    Balance(usize),
    DebitCredit {
        debit: Option<usize>,
        credit: Option<usize>,
    },
}

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Columns {
    names: Vec<String>,
    account: usize,
    amounts: AmountColumns,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |candidates: &[&str]| {
            candidates
                .iter()
                .find_map(|c| names.iter().position(|n| n == c))
        };

        let account = find(&ACCOUNT_COLUMNS).ok_or(LoadError::MissingColumn("account_number"))?;

        let amounts = match find(&[BALANCE_COLUMN]) {
            Some(idx) => AmountColumns::Balance(idx),
            None => {
                let debit = find(&DEBIT_COLUMNS);
                let credit = find(&CREDIT_COLUMNS);
                if debit.is_none() && credit.is_none() {
                    return Err(LoadError::MissingColumn("balance"));
                }
                AmountColumns::DebitCredit { debit, credit }
            }
        };

        Ok(Self {
            names,
            account,
            amounts,
        })
    }

    fn amount(&self, record: &StringRecord, idx: usize, line: u64) -> Result<Decimal, LoadError> {
        let raw = record.get(idx).unwrap_or_default();
        parse_amount(raw).ok_or_else(|| LoadError::InvalidAmount {
            line,
            column: self.names[idx].clone(),
            value: raw.to_string(),
        })
    }

    fn row(
        &self,
        account: &str,
        record: &StringRecord,
        line: u64,
    ) -> Result<AccountBalance, LoadError> {
        match self.amounts {
            AmountColumns::Balance(idx) => {
                Ok(AccountBalance::new(account, self.amount(record, idx, line)?))
            }
            AmountColumns::DebitCredit { debit, credit } => {
                let debit = match debit {
                    Some(idx) => self.amount(record, idx, line)?,
                    None => Decimal::ZERO,
                };
                let credit = match credit {
                    Some(idx) => self.amount(record, idx, line)?,
                    None => Decimal::ZERO,
                };
                Ok(AccountBalance::from_debit_credit(account, debit, credit))
            }
        }
    }
}

/// Lower-cases a header, turns spaces into underscores and drops periods.
fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('.', "")
}

/// Parses an amount cell. Empty cells are zero; thousands separators and
/// inner spaces are ignored.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }

    Decimal::from_str(&cleaned).ok()
}

/// Reads a trial balance from CSV.
///
/// Rows with an empty account number are skipped. A header-only input
/// yields an empty table.
pub fn read_trial_balance<R: Read>(reader: R) -> Result<TrialBalance, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(rdr.headers()?)?;
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);

        let account = record.get(columns.account).unwrap_or_default();
        if account.is_empty() {
            debug!(line, "Skipping row without account number");
            continue;
        }

        rows.push(columns.row(account, &record, line)?);
    }

    Ok(TrialBalance::new(rows))
}

/// Loads a trial balance CSV file.
pub fn load_trial_balance(path: &Path) -> Result<TrialBalance, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let trial_balance = read_trial_balance(file)?;
    info!(
        path = %path.display(),
        rows = trial_balance.len(),
        total = %trial_balance.total(),
        "Trial balance loaded"
    );
    Ok(trial_balance)
}
