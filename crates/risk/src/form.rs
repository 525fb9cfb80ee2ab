use core_types::{parse_numeric, Field, FieldUpdate, TradeParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Applies a single field edit and returns the resulting snapshot.
///
/// Editing `RiskPercent` recomputes `risk_price` from the investment amount,
/// editing `RiskPrice` recomputes `risk_percent` (floored to a whole percent).
/// Every other edit touches only its own field. When the synchronized value
/// cannot be computed (empty operand, zero investment, overflow) it becomes
/// empty rather than an error.
pub fn update_field(params: &TradeParameters, field: Field, raw: &str) -> TradeParameters {
    let mut next = params.clone();

    match field {
        Field::SymbolName => next.symbol_name = raw.to_string(),
        Field::RiskPercent => {
            next.risk_percent = parse_numeric(raw);
            next.risk_price = risk_price_from_percent(next.investment_amount, next.risk_percent);
        }
        Field::RiskPrice => {
            next.risk_price = parse_numeric(raw);
            next.risk_percent = risk_percent_from_price(next.investment_amount, next.risk_price);
        }
        Field::InvestmentAmount | Field::ProfitLimit | Field::BuyPrice | Field::LossLimit => {
            if let Some(slot) = next.numeric_mut(field) {
                *slot = parse_numeric(raw);
            }
        }
    }

    tracing::debug!(
        field = %field,
        raw,
        risk_percent = ?next.risk_percent,
        risk_price = ?next.risk_price,
        "Applied field update"
    );

    next
}

/// `investment * percent / 100`
fn risk_price_from_percent(investment: Option<Decimal>, percent: Option<Decimal>) -> Option<Decimal> {
    investment?.checked_mul(percent?)?.checked_div(dec!(100))
}

/// `floor(price / investment * 100)`
fn risk_percent_from_price(investment: Option<Decimal>, price: Option<Decimal>) -> Option<Decimal> {
    let investment = investment?;
    if investment.is_zero() {
        return None;
    }
    Some(price?.checked_div(investment)?.checked_mul(dec!(100))?.floor())
}

/// Owns the current form snapshot for a session.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    params: TradeParameters,
}

impl FormState {
    /// Starts with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &TradeParameters {
        &self.params
    }

    /// Applies an input event and returns the new snapshot.
    pub fn apply(&mut self, update: &FieldUpdate) -> &TradeParameters {
        self.set(update.field, &update.value)
    }

    pub fn set(&mut self, field: Field, raw: &str) -> &TradeParameters {
        self.params = update_field(&self.params, field, raw);
        &self.params
    }

    pub fn reset(&mut self) {
        self.params = TradeParameters::new();
    }
}
