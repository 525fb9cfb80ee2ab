use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing `config.toml` yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calculator: Calculator,
    pub report: Report,
    pub logging: Logging,
}

/// Parameters for the metrics calculator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Calculator {
    /// Decimal places kept on the profit/loss ratio.
    pub ratio_decimals: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self { ratio_decimals: 2 }
    }
}

/// How the summary view is labelled, formatted and exported.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Report {
    /// Row labels and units.
    pub language: Language,
    /// Overrides the language's default currency unit (e.g. "USD").
    pub currency: Option<String>,
    /// Digits per thousands group in displayed amounts.
    pub thousands_group: usize,
    /// Decimal places shown for derived amounts and the trade volume.
    pub amount_decimals: u32,
    /// `chrono` format string for the date & time row and export file names.
    pub timestamp_format: String,
    /// Border style of the terminal table.
    pub table_style: TableStyle,
    /// Default directory for exported documents.
    pub export_dir: PathBuf,
    /// Default document format.
    pub export_format: ExportFormat,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            language: Language::En,
            currency: None,
            thousands_group: 3,
            amount_decimals: 2,
            timestamp_format: "%Y-%m-%d - %H:%M:%S".to_string(),
            table_style: TableStyle::Utf8,
            export_dir: PathBuf::from("."),
            export_format: ExportFormat::Text,
        }
    }
}

/// Logging sinks. The filter uses `tracing_subscriber::EnvFilter` syntax and
/// is overridden by `RUST_LOG`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub filter: String,
    /// When set, logs are also written to `riskcalc.log` in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    #[default]
    En,
    Fa,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TableStyle {
    #[default]
    Utf8,
    Ascii,
    Markdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
    Json,
}
