use crate::format::{format_amount, format_input};
use crate::labels::Labels;
use core_types::{DerivedMetrics, TradeParameters};
use risk::FieldFlags;
use serde::Serialize;

/// Identifies a row of the summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    DateTime,
    Symbol,
    TradeVolume,
    TradeRisk,
    RequiredCapital,
    TradeProfit,
    ProfitLimit,
    BuyPrice,
    LossLimit,
    ProfitToLossRatio,
}

/// One labelled line of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub kind: RowKind,
    pub label: String,
    pub value: String,
    pub unit: String,
    /// Set when the underlying input carries an error indicator.
    pub flagged: bool,
}

/// Formatting choices for building a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub labels: Labels,
    pub thousands_group: usize,
    pub amount_decimals: u32,
    pub ratio_decimals: u32,
}

impl ViewOptions {
    pub fn from_settings(report: &configuration::Report, ratio_decimals: u32) -> Self {
        Self {
            labels: Labels::for_language(report.language)
                .with_currency(report.currency.as_deref()),
            thousands_group: report.thousands_group,
            amount_decimals: report.amount_decimals,
            ratio_decimals,
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            thousands_group: 3,
            amount_decimals: 2,
            ratio_decimals: 2,
        }
    }
}

/// The fully rendered summary of a trade, ready to display or export.
///
/// This is the only thing document exporters see; they never reach back into
/// the form or the calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub generated_at: String,
    pub symbol: String,
    pub labels: Labels,
    pub rows: Vec<SummaryRow>,
    pub flags: FieldFlags,
    pub params: TradeParameters,
    pub metrics: DerivedMetrics,
}

impl SummaryView {
    /// Lays out the ten summary rows in display order.
    pub fn build(
        params: &TradeParameters,
        metrics: &DerivedMetrics,
        flags: FieldFlags,
        generated_at: &str,
        options: &ViewOptions,
    ) -> Self {
        let labels = &options.labels;
        let group = options.thousands_group;
        let amount = |value| format_amount(value, options.amount_decimals, group);
        let currency = || labels.currency_unit.clone();

        let row = |kind, label: &str, value: String, unit: String| SummaryRow {
            kind,
            label: label.to_string(),
            value,
            unit,
            flagged: false,
        };

        let rows = vec![
            row(RowKind::DateTime, &labels.date_time, generated_at.to_string(), String::new()),
            row(RowKind::Symbol, &labels.symbol, params.symbol_name.clone(), String::new()),
            row(
                RowKind::TradeVolume,
                &labels.trade_volume,
                amount(metrics.trade_volume),
                labels.volume_unit.clone(),
            ),
            SummaryRow {
                flagged: flags.risk_price_exceeds_investment,
                ..row(
                    RowKind::TradeRisk,
                    &labels.trade_risk,
                    amount(metrics.trade_risk),
                    currency(),
                )
            },
            row(
                RowKind::RequiredCapital,
                &labels.required_capital,
                amount(metrics.required_capital),
                currency(),
            ),
            row(
                RowKind::TradeProfit,
                &labels.trade_profit,
                amount(metrics.trade_profit),
                currency(),
            ),
            row(
                RowKind::ProfitLimit,
                &labels.profit_limit,
                format_input(params.profit_limit, group),
                currency(),
            ),
            row(
                RowKind::BuyPrice,
                &labels.buy_price,
                format_input(params.buy_price, group),
                currency(),
            ),
            row(
                RowKind::LossLimit,
                &labels.loss_limit,
                format_input(params.loss_limit, group),
                currency(),
            ),
            row(
                RowKind::ProfitToLossRatio,
                &labels.profit_to_loss_ratio,
                format!(
                    "{:.*}",
                    options.ratio_decimals as usize, metrics.profit_to_loss_ratio
                ),
                String::new(),
            ),
        ];

        Self {
            generated_at: generated_at.to_string(),
            symbol: params.symbol_name.clone(),
            labels: labels.clone(),
            rows,
            flags,
            params: params.clone(),
            metrics: *metrics,
        }
    }

    pub fn row(&self, kind: RowKind) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.kind == kind)
    }
}
