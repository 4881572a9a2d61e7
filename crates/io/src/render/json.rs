//! JSON renderer.

use std::io::Write;

use statera_core::FinancialStatements;

use crate::error::RenderError;

/// Serialises the whole build, placeholders and diagnostics included.
pub fn render_json<W: Write>(
    statements: &FinancialStatements,
    writer: &mut W,
) -> Result<(), RenderError> {
    serde_json::to_writer_pretty(&mut *writer, statements)?;
    writeln!(writer)?;
    Ok(())
}
