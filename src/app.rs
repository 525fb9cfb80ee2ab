use anyhow::Context;
use configuration::{Config, ExportFormat};
use core_types::{Field, TradeParameters};
use report::{exporter_for, export_view, format_timestamp, render_table, Clock, SummaryView, ViewOptions};
use risk::{validate, FieldFlags, MetricsCalculator};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Everything a driver needs to turn a form snapshot into output.
pub struct App {
    config: Config,
    calculator: MetricsCalculator,
    options: ViewOptions,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(config: Config, clock: impl Clock + 'static) -> anyhow::Result<Self> {
        let calculator = MetricsCalculator::new(config.calculator.ratio_decimals)
            .context("Invalid calculator settings")?;
        let options = ViewOptions::from_settings(&config.report, calculator.ratio_decimals());
        // A format chrono cannot render would fail every later view.
        format_timestamp(&clock.now(), &config.report.timestamp_format)
            .context("Invalid report.timestamp_format")?;
        Ok(Self {
            config,
            calculator,
            options,
            clock: Box::new(clock),
        })
    }

    /// Recomputes metrics and flags and lays out the summary, stamped with the
    /// clock's current time.
    pub fn view(&self, params: &TradeParameters) -> anyhow::Result<SummaryView> {
        let metrics = self.calculator.compute(params);
        let flags = validate(params);
        tracing::debug!(?metrics, ?flags, "Recomputed trade summary");

        let generated_at = format_timestamp(&self.clock.now(), &self.config.report.timestamp_format)?;
        Ok(SummaryView::build(params, &metrics, flags, &generated_at, &self.options))
    }

    /// The view as a terminal table.
    pub fn render(&self, view: &SummaryView) -> String {
        render_table(view, self.config.report.table_style).to_string()
    }

    /// Prints the table followed by one `warning:` line per raised flag.
    pub fn write_summary<W: Write>(&self, view: &SummaryView, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.render(view))?;
        for message in flag_messages(&view.flags) {
            writeln!(out, "warning: {message}")?;
        }
        Ok(())
    }

    /// Writes the view to `dir` (or the configured export directory) in the
    /// given format (or the configured one).
    pub fn export(
        &self,
        view: &SummaryView,
        dir: Option<&Path>,
        format: Option<ExportFormat>,
    ) -> anyhow::Result<PathBuf> {
        let dir = dir.unwrap_or(self.config.report.export_dir.as_path());
        let exporter = exporter_for(format.unwrap_or(self.config.report.export_format));
        export_view(dir, view, exporter.as_ref())
            .with_context(|| format!("Failed to export summary to {}", dir.display()))
    }
}

/// Human-readable warnings for the raised field flags.
pub fn flag_messages(flags: &FieldFlags) -> Vec<String> {
    flags
        .flagged_fields()
        .into_iter()
        .map(|field| match field {
            Field::RiskPercent => format!("{field} is outside the 0-100 range"),
            Field::RiskPrice => format!("{field} exceeds {}", Field::InvestmentAmount),
            other => format!("{other} is out of bounds"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use report::{FixedClock, RowKind};
    use risk::update_field;

    fn test_app(config: Config) -> App {
        let clock = FixedClock(DateTime::parse_from_rfc3339("2024-03-20T14:05:09+00:00").unwrap());
        App::new(config, clock).unwrap()
    }

    #[test]
    fn test_view_uses_clock_and_config() {
        let mut config = Config::default();
        config.report.timestamp_format = "%d/%m/%Y".to_string();
        config.report.currency = Some("USD".to_string());
        let app = test_app(config);

        let params = update_field(&TradeParameters::new(), Field::BuyPrice, "10");
        let view = app.view(&params).unwrap();
        assert_eq!(view.generated_at, "20/03/2024");
        assert_eq!(view.row(RowKind::BuyPrice).unwrap().unit, "USD");
    }

    #[test]
    fn test_summary_warns_once_per_flag() {
        let mut config = Config::default();
        config.report.table_style = configuration::TableStyle::Ascii;
        let app = test_app(config);

        let params = update_field(&TradeParameters::new(), Field::InvestmentAmount, "1000");
        let params = update_field(&params, Field::RiskPrice, "2000");
        let mut out = Vec::new();
        app.write_summary(&app.view(&params).unwrap(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(output.matches("warning: riskPrice exceeds investmentAmount").count(), 1);
        assert_eq!(output.matches("warning: riskPercent is outside").count(), 1);
        assert!(output.contains("Trade risk"));
    }

    #[test]
    fn test_invalid_ratio_precision_is_rejected() {
        let mut config = Config::default();
        config.calculator.ratio_decimals = 99;
        let clock = FixedClock(DateTime::parse_from_rfc3339("2024-03-20T14:05:09+00:00").unwrap());
        assert!(App::new(config, clock).is_err());
    }

    #[test]
    fn test_unrenderable_timestamp_format_is_rejected_up_front() {
        let mut config = Config::default();
        config.report.timestamp_format = "%Y-%Q".to_string();
        let clock = FixedClock(DateTime::parse_from_rfc3339("2024-03-20T14:05:09+00:00").unwrap());
        assert!(App::new(config, clock).is_err());
    }

    #[test]
    fn test_flag_messages() {
        let flags = FieldFlags {
            risk_percent_out_of_range: true,
            risk_price_exceeds_investment: true,
        };
        assert_eq!(
            flag_messages(&flags),
            vec![
                "riskPercent is outside the 0-100 range".to_string(),
                "riskPrice exceeds investmentAmount".to_string(),
            ]
        );
        assert!(flag_messages(&FieldFlags::default()).is_empty());
    }
}
