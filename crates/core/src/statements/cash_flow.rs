//! Cash flow statement placeholder.
//!
//! A cash flow statement needs two balance sheets (opening and closing) to
//! derive movements. A single trial balance cannot supply that, so the
//! statement is always emitted as unsupported.

use super::types::{Statement, StatementKind};

/// Text of the single informational line of the placeholder.
pub const CASH_FLOW_PLACEHOLDER: &str =
    "Cash flow statement requires comparative balance sheets and is not computed.";

/// Builds the unsupported cash flow placeholder.
#[must_use]
pub fn placeholder() -> Statement {
    Statement::unsupported(StatementKind::CashFlow, CASH_FLOW_PLACEHOLDER)
}
