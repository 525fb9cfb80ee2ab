use crate::error::ReportError;
use crate::render::render_table;
use crate::view::SummaryView;
use configuration::{ExportFormat, TableStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Turns a rendered summary view into document bytes.
///
/// Exporters receive only the finished view, never the form state, so the
/// calculator stays free of side effects.
pub trait DocumentExporter {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    fn render(&self, view: &SummaryView) -> Result<Vec<u8>, ReportError>;
}

/// Writes the summary as a bordered or Markdown table.
#[derive(Debug, Clone, Copy)]
pub struct TextExporter {
    style: TableStyle,
}

impl TextExporter {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    pub fn markdown() -> Self {
        Self::new(TableStyle::Markdown)
    }
}

impl DocumentExporter for TextExporter {
    fn extension(&self) -> &'static str {
        match self.style {
            TableStyle::Markdown => "md",
            TableStyle::Utf8 | TableStyle::Ascii => "txt",
        }
    }

    fn render(&self, view: &SummaryView) -> Result<Vec<u8>, ReportError> {
        let mut table = render_table(view, self.style);
        table.force_no_tty();
        Ok(format!("{table}\n").into_bytes())
    }
}

/// Writes the whole view, including raw inputs and metrics, as pretty JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl DocumentExporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, view: &SummaryView) -> Result<Vec<u8>, ReportError> {
        let mut bytes = serde_json::to_vec_pretty(view)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Picks the exporter for a configured format.
pub fn exporter_for(format: ExportFormat) -> Box<dyn DocumentExporter> {
    match format {
        ExportFormat::Text => Box::new(TextExporter::new(TableStyle::Utf8)),
        ExportFormat::Markdown => Box::new(TextExporter::markdown()),
        ExportFormat::Json => Box::new(JsonExporter),
    }
}

/// Builds `"<symbol> <timestamp>.<extension>"`, replacing characters that are
/// not allowed in file names on common platforms.
pub fn export_file_name(symbol: &str, generated_at: &str, extension: &str) -> String {
    let symbol = symbol.trim();
    let symbol = if symbol.is_empty() { "summary" } else { symbol };
    let stem: String = format!("{symbol} {generated_at}")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}.{}", stem.trim(), extension)
}

/// Renders the view and writes it into `dir`, returning the written path.
pub fn export_view(
    dir: &Path,
    view: &SummaryView,
    exporter: &dyn DocumentExporter,
) -> Result<PathBuf, ReportError> {
    let bytes = exporter.render(view)?;
    fs::create_dir_all(dir)?;

    let path = dir.join(export_file_name(&view.symbol, &view.generated_at, exporter.extension()));
    fs::write(&path, &bytes)?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "Exported trade summary");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewOptions;
    use core_types::{Field, TradeParameters};
    use risk::{compute_metrics, update_field, validate};
    use tempfile::TempDir;

    fn example_view(symbol: &str) -> SummaryView {
        let params = [
            (Field::SymbolName, symbol),
            (Field::InvestmentAmount, "1000000"),
            (Field::RiskPercent, "5"),
            (Field::BuyPrice, "1000"),
            (Field::LossLimit, "900"),
            (Field::ProfitLimit, "1200"),
        ]
        .into_iter()
        .fold(TradeParameters::new(), |acc, (field, raw)| update_field(&acc, field, raw));
        SummaryView::build(
            &params,
            &compute_metrics(&params),
            validate(&params),
            "2024-03-20 - 14:05:09",
            &ViewOptions::default(),
        )
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("FOLD", "2024-03-20 - 14:05:09", "txt"),
            "FOLD 2024-03-20 - 14-05-09.txt"
        );
        assert_eq!(export_file_name("  ", "now", "json"), "summary now.json");
        assert_eq!(export_file_name("a/b", "x", "md"), "a-b x.md");
    }

    #[test]
    fn test_exporter_for_format() {
        assert_eq!(exporter_for(ExportFormat::Text).extension(), "txt");
        assert_eq!(exporter_for(ExportFormat::Markdown).extension(), "md");
        assert_eq!(exporter_for(ExportFormat::Json).extension(), "json");
    }

    #[test]
    fn test_json_document_contains_metrics() {
        let bytes = JsonExporter.render(&example_view("FOLD")).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["symbol"], "FOLD");
        assert_eq!(json["rows"].as_array().unwrap().len(), 10);
        assert_eq!(json["rows"][9]["value"], "2.00");
        assert_eq!(json["flags"]["riskPriceExceedsInvestment"], false);
        assert!(json["metrics"]["tradeVolume"].is_string());
    }

    #[test]
    fn test_text_document_is_plain() {
        let bytes = TextExporter::new(TableStyle::Ascii)
            .render(&example_view("FOLD"))
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("500,000"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_export_view_writes_file() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("reports");
        let view = example_view("FOLD");
        let path = export_view(&dir, &view, &TextExporter::markdown()).unwrap();

        assert_eq!(path.parent(), Some(dir.as_path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("FOLD 2024-03-20 - 14-05-09.md")
        );
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Trade profit"));
        assert!(written.contains("100,000"));
    }
}
