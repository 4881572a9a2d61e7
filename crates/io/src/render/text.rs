//! Plain-text renderer.

use std::io::Write;

use statera_core::{FinancialStatements, LineItem, Statement};
use statera_shared::types::format_amount;

use super::RenderOptions;
use crate::error::RenderError;

const DESCRIPTION_WIDTH: usize = 48;
const AMOUNT_WIDTH: usize = 20;
const WIDTH: usize = DESCRIPTION_WIDTH + AMOUNT_WIDTH;
const RULE_WIDTH: usize = 16;
const INDENT: &str = "    ";

/// Renders supported statements as fixed-width text.
pub fn render_text<W: Write>(
    statements: &FinancialStatements,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<(), RenderError> {
    for (i, statement) in statements.supported().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        write_statement(statement, options, writer)?;
    }
    Ok(())
}

fn write_statement<W: Write>(
    statement: &Statement,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<(), RenderError> {
    for title in [
        options.company_name.as_str(),
        statement.name(),
        options.period_label.as_str(),
    ] {
        if !title.is_empty() {
            writeln!(writer, "{title:^WIDTH$}")?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "{:<DESCRIPTION_WIDTH$}{:>AMOUNT_WIDTH$}", "Description", "Amount")?;
    writeln!(writer, "{}", "-".repeat(WIDTH))?;

    for line in statement.lines() {
        write_line(line, &options.currency_symbol, writer)?;
    }
    Ok(())
}

fn write_line<W: Write>(line: &LineItem, symbol: &str, writer: &mut W) -> Result<(), RenderError> {
    let label = format!("{}{}", INDENT.repeat(usize::from(line.level)), line.description);

    let Some(amount) = line.amount else {
        writeln!(writer, "{label}")?;
        return Ok(());
    };

    if line.is_total {
        rule(writer, '-')?;
    }
    writeln!(
        writer,
        "{label:<DESCRIPTION_WIDTH$}{:>AMOUNT_WIDTH$}",
        format_amount(amount, symbol)
    )?;
    if line.is_final_total {
        rule(writer, '=')?;
    }
    Ok(())
}

fn rule<W: Write>(writer: &mut W, ch: char) -> Result<(), RenderError> {
    let rule: String = std::iter::repeat_n(ch, RULE_WIDTH).collect();
    writeln!(writer, "{:DESCRIPTION_WIDTH$}{rule:>AMOUNT_WIDTH$}", "")?;
    Ok(())
}
