//! CSV renderer: one row per line item.

use std::io::Write;

use serde::Serialize;
use statera_core::FinancialStatements;

use crate::error::RenderError;

#[derive(Serialize)]
struct CsvRow<'a> {
    statement: &'a str,
    description: &'a str,
    amount: Option<String>,
    level: u8,
    is_header: bool,
    is_total: bool,
    is_final_total: bool,
}

/// Renders supported statements as CSV with a header row.
pub fn render_csv<W: Write>(
    statements: &FinancialStatements,
    writer: &mut W,
) -> Result<(), RenderError> {
    let mut wrt = ::csv::WriterBuilder::new().from_writer(writer);

    for statement in statements.supported() {
        for line in statement.lines() {
            wrt.serialize(CsvRow {
                statement: statement.name(),
                description: &line.description,
                amount: line.amount.map(|a| a.to_string()),
                level: line.level,
                is_header: line.is_header,
                is_total: line.is_total,
                is_final_total: line.is_final_total,
            })?;
        }
    }

    wrt.flush()?;
    Ok(())
}
