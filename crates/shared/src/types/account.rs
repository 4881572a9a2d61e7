//! Ledger account identifiers.
//!
//! Account numbers are opaque strings: "1000", "1000-01" and "CASH" are all
//! valid. Matching is exact after trimming surrounding whitespace.

use serde::{Deserialize, Serialize};

/// Identifier of a ledger account as it appears in the trial balance and the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Creates an account number, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    /// Returns the account number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the account number is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<u64> for AccountNumber {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
