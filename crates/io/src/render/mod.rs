//! Statement renderers.
//!
//! Every renderer writes to any `std::io::Write`. Text and CSV output
//! contain only supported statements; JSON keeps placeholders, flagged.

mod csv;
mod json;
mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use statera_core::FinancialStatements;
use statera_shared::config::{OutputFormat, ReportConfig};
use tracing::info;

use crate::error::RenderError;

pub use self::csv::render_csv;
pub use self::json::render_json;
pub use self::text::render_text;

/// Presentation settings shared by the renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Company name printed above each statement; omitted when empty.
    pub company_name: String,
    /// Period label printed under the statement name; omitted when empty.
    pub period_label: String,
    /// Symbol prefixed to amounts in text output.
    pub currency_symbol: String,
}

impl From<&ReportConfig> for RenderOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            company_name: config.company_name.clone(),
            period_label: config.period_label.clone(),
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

/// Renders `statements` in `format`.
pub fn render<W: Write>(
    format: OutputFormat,
    statements: &FinancialStatements,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Text => render_text(statements, options, writer),
        OutputFormat::Csv => render_csv(statements, writer),
        OutputFormat::Json => render_json(statements, writer),
    }
}

/// `<dir>/<input stem>_statements.<ext>`.
#[must_use]
pub fn output_path(dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "trial_balance".into(), |s| s.to_string_lossy());
    dir.join(format!("{stem}_statements.{}", format.extension()))
}

/// Renders into the output file for `input`, creating `dir` if needed.
pub fn write_report(
    dir: &Path,
    input: &Path,
    format: OutputFormat,
    statements: &FinancialStatements,
    options: &RenderOptions,
) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(dir)?;

    let path = output_path(dir, input, format);
    let mut writer = BufWriter::new(File::create(&path)?);
    render(format, statements, options, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), %format, "Report written");
    Ok(path)
}
