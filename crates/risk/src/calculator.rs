use crate::error::RiskError;
use core_types::{DerivedMetrics, TradeParameters};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on the profit/loss ratio unless configured otherwise.
pub const DEFAULT_RATIO_DECIMALS: u32 = 2;

pub use core_types::MAX_RATIO_DECIMALS;

/// A stateless calculator for the values shown next to the trade form.
///
/// Every metric that cannot be computed (empty operand, zero denominator,
/// overflow) is reported as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsCalculator {
    ratio_decimals: u32,
}

impl MetricsCalculator {
    /// Creates a calculator that rounds the profit/loss ratio to `ratio_decimals` places.
    pub fn new(ratio_decimals: u32) -> Result<Self, RiskError> {
        if ratio_decimals > MAX_RATIO_DECIMALS {
            return Err(RiskError::InvalidParameters(format!(
                "ratio_decimals must be at most {MAX_RATIO_DECIMALS}, got {ratio_decimals}"
            )));
        }
        Ok(Self { ratio_decimals })
    }

    pub fn ratio_decimals(&self) -> u32 {
        self.ratio_decimals
    }

    /// Derives all metrics from a snapshot.
    pub fn compute(&self, params: &TradeParameters) -> DerivedMetrics {
        // --- 1. Distances from the entry price ---
        let stop_distance = params
            .buy_price
            .zip(params.loss_limit)
            .and_then(|(buy, loss)| buy.checked_sub(loss));
        let target_distance = params
            .profit_limit
            .zip(params.buy_price)
            .and_then(|(profit, buy)| profit.checked_sub(buy));

        // --- 2. Volume first; capital and profit scale with it ---
        let trade_volume = guarded_div(params.risk_price, stop_distance);
        let trade_risk = params.risk_price.unwrap_or(Decimal::ZERO);
        let required_capital = params
            .buy_price
            .and_then(|buy| trade_volume.checked_mul(buy))
            .unwrap_or(Decimal::ZERO);
        let trade_profit = target_distance
            .and_then(|distance| trade_volume.checked_mul(distance))
            .unwrap_or(Decimal::ZERO);

        // --- 3. Reward per unit of risk ---
        let profit_to_loss_ratio = guarded_div(target_distance, stop_distance)
            .round_dp_with_strategy(self.ratio_decimals, RoundingStrategy::MidpointAwayFromZero);

        let metrics = DerivedMetrics {
            trade_volume,
            trade_risk,
            required_capital,
            trade_profit,
            profit_to_loss_ratio,
        };
        tracing::debug!(?metrics, "Computed trade metrics");
        metrics
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self {
            ratio_decimals: DEFAULT_RATIO_DECIMALS,
        }
    }
}

/// Computes the metrics with the default ratio precision.
pub fn compute_metrics(params: &TradeParameters) -> DerivedMetrics {
    MetricsCalculator::default().compute(params)
}

/// `numerator / denominator`, or zero when either side is missing, the
/// denominator is zero, or the division overflows.
fn guarded_div(numerator: Option<Decimal>, denominator: Option<Decimal>) -> Decimal {
    match (numerator, denominator) {
        (Some(n), Some(d)) if !d.is_zero() => n.checked_div(d).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}
