//! Statera command-line driver.
//!
//! Turns a trial balance CSV and a mapping template into an income
//! statement and a balance sheet.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use statera_core::{BuildOptions, StatementService};
use statera_io::{RenderOptions, load_mapping, load_trial_balance, render, write_report};
use statera_shared::config::{OutputFormat, UnmappedPolicy};
use statera_shared::{AppConfig, AppError};

#[derive(Parser, Debug)]
#[command(
    name = "statera",
    version,
    about = "Build financial statements from a trial balance"
)]
struct Cli {
    /// Trial balance CSV file
    input: PathBuf,

    /// Mapping template (JSON)
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// Directory for generated reports
    #[arg(short, long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Output format; repeat or separate with commas
    #[arg(short, long = "format", value_delimiter = ',')]
    formats: Vec<OutputFormat>,

    /// Company name printed above each statement
    #[arg(long)]
    company: Option<String>,

    /// Period label printed under each statement name
    #[arg(long)]
    period: Option<String>,

    /// Currency symbol for text output
    #[arg(long)]
    currency: Option<String>,

    /// Unmapped account handling: ignore, warn or deny
    #[arg(long)]
    unmapped: Option<UnmappedPolicy>,

    /// Configuration file layered over config/default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print the text rendering to stdout
    #[arg(long)]
    stdout: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command-line flags win over configuration files and environment.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(mapping) = &self.mapping {
            config.input.mapping_path.clone_from(mapping);
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir.clone_from(dir);
        }
        if !self.formats.is_empty() {
            config.output.formats.clone_from(&self.formats);
        }
        if let Some(company) = &self.company {
            config.report.company_name.clone_from(company);
        }
        if let Some(period) = &self.period {
            config.report.period_label.clone_from(period);
        }
        if let Some(currency) = &self.currency {
            config.report.currency_symbol.clone_from(currency);
        }
        if let Some(unmapped) = self.unmapped {
            config.report.unmapped = unmapped;
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for --stdout
    let default_filter = if cli.verbose {
        "statera=debug"
    } else {
        "statera=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = classify(err);
            error!(code = err.error_code(), "{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Recovers the `AppError` behind a failure; anything else is internal.
fn classify(err: anyhow::Error) -> AppError {
    err.downcast::<AppError>()
        .unwrap_or_else(|other| AppError::Internal(format!("{other:#}")))
}

/// Loads, builds and writes the reports; `--stdout` text goes to `out`.
fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    // Load configuration
    let mut config = AppConfig::load_from(cli.config.as_deref()).map_err(AppError::from)?;
    cli.apply(&mut config);

    let trial_balance = load_trial_balance(&cli.input).map_err(AppError::from)?;
    let mapping = load_mapping(&config.input.mapping_path).map_err(AppError::from)?;

    let options = BuildOptions::from(&config.report);
    let statements =
        StatementService::build_with(&trial_balance, &mapping, &options).map_err(AppError::from)?;

    let Some(summary) = statements.summary() else {
        warn!(
            input = %cli.input.display(),
            "Trial balance or mapping is empty; nothing to report"
        );
        return Ok(());
    };

    info!(
        net_income = %summary.net_income,
        total_assets = %summary.total_assets,
        total_liabilities_and_equity = %summary.total_liabilities_and_equity,
        balanced = summary.is_balanced,
        diagnostics = statements.diagnostics().len(),
        "Statements built"
    );

    let render_options = RenderOptions::from(&config.report);
    for format in &config.output.formats {
        write_report(
            &config.output.dir,
            &cli.input,
            *format,
            &statements,
            &render_options,
        )
        .map_err(AppError::from)?;
    }

    if cli.stdout {
        render(OutputFormat::Text, &statements, &render_options, out).map_err(AppError::from)?;
    }

    Ok(())
}
