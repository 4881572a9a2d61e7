//! Statement build error types.

use statera_shared::AppError;
use statera_shared::types::AccountNumber;
use thiserror::Error;

use crate::mapping::MappingError;

/// Errors that can occur during statement generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// The mapping is incomplete or malformed.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Trial balance accounts no line item claims, under a deny policy.
    #[error("{} trial balance account(s) are not mapped: {}", .0.len(), join(.0))]
    UnmappedAccounts(Vec<AccountNumber>),
}

fn join(accounts: &[AccountNumber]) -> String {
    accounts
        .iter()
        .map(AccountNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<StatementError> for AppError {
    fn from(err: StatementError) -> Self {
        match err {
            StatementError::Mapping(e) => Self::Mapping(e.to_string()),
            StatementError::UnmappedAccounts(_) => Self::Validation(err.to_string()),
        }
    }
}
