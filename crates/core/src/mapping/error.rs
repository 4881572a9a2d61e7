//! Mapping error types.

use thiserror::Error;

/// Errors raised while reading or validating a mapping template.
///
/// Every structural error names the path it was found at, e.g.
/// `Balance Sheet > Equity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The document is not valid JSON.
    #[error("Mapping is not valid JSON: {0}")]
    InvalidJson(String),

    /// A required key is missing.
    #[error("Missing key \"{key}\" at {path}")]
    MissingKey {
        /// Path of the object that should contain the key.
        path: String,
        /// The missing key.
        key: String,
    },

    /// A value has the wrong shape.
    #[error("Expected {expected} at {path}")]
    InvalidType {
        /// Path of the offending value.
        path: String,
        /// Description of the expected shape.
        expected: &'static str,
    },

    /// An account number entry is neither a non-empty string nor a non-negative integer.
    #[error("Invalid account number at {path}[{index}]")]
    InvalidAccount {
        /// Path of the account list.
        path: String,
        /// Position within the list.
        index: usize,
    },

    /// A section, sub-section or line item has a blank name.
    #[error("Blank name at {path}")]
    BlankName {
        /// Path of the parent object.
        path: String,
    },

    /// Equity has no "Retained Earnings" line item or sub-section.
    #[error("Missing \"Retained Earnings\" under Balance Sheet > Equity")]
    MissingRetainedEarnings,
}
