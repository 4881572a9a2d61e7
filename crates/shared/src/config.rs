//! Application configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input configuration.
    pub input: InputConfig,
    /// Output configuration.
    pub output: OutputConfig,
    /// Report presentation and build policy.
    pub report: ReportConfig,
}

/// Input configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the mapping template.
    pub mapping_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mapping_path: PathBuf::from("mapping_template.json"),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the reports are written to.
    pub dir: PathBuf,
    /// Report formats to write.
    pub formats: Vec<OutputFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("outputs"),
            formats: vec![OutputFormat::Text, OutputFormat::Csv],
        }
    }
}

/// Report presentation and build policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Company name printed above every statement.
    pub company_name: String,
    /// Period label printed under the statement name.
    pub period_label: String,
    /// Symbol prefixed to formatted amounts (e.g. "TT$").
    pub currency_symbol: String,
    /// What to do with trial balance accounts no line item claims.
    pub unmapped: UnmappedPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            period_label: "For the period ended".to_string(),
            currency_symbol: String::new(),
            unmapped: UnmappedPolicy::default(),
        }
    }
}

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text statements.
    Text,
    /// One CSV row per line item.
    Csv,
    /// The full statement model as JSON.
    Json,
}

impl OutputFormat {
    /// File extension used for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Policy for trial balance accounts that no mapping line item claims.
///
/// Unmapped balances are left out of every statement, which unbalances the
/// balance sheet whenever they are non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Exclude silently.
    Ignore,
    /// Exclude and report a diagnostic.
    #[default]
    Warn,
    /// Fail the build.
    Deny,
}

impl std::fmt::Display for UnmappedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Warn => write!(f, "warn"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

impl std::str::FromStr for UnmappedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "deny" => Ok(Self::Deny),
            _ => Err(format!("Unknown unmapped-account policy: {s}")),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration, layering an explicit file over the defaults.
    ///
    /// Sources, lowest precedence first: `config/default`,
    /// `config/{STATERA_ENV}`, `extra`, then `STATERA__SECTION__KEY`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `extra` cannot be read or any value has the wrong type.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("STATERA_ENV").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("STATERA")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("output.formats")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
