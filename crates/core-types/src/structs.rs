use crate::enums::Field;
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The seven user-entered inputs describing a planned trade.
///
/// Numeric fields are `None` while empty or when the typed text is not a
/// number. A snapshot is never modified in place; the form produces a new one
/// on every update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParameters {
    /// Free-text label, not used in any calculation.
    pub symbol_name: String,
    /// Total capital available.
    pub investment_amount: Option<Decimal>,
    /// Share of capital willing to risk, expected in 0..=100.
    pub risk_percent: Option<Decimal>,
    /// Absolute currency amount willing to risk.
    pub risk_price: Option<Decimal>,
    /// Take-profit price.
    pub profit_limit: Option<Decimal>,
    /// Entry price.
    pub buy_price: Option<Decimal>,
    /// Stop-loss price.
    pub loss_limit: Option<Decimal>,
}

impl TradeParameters {
    /// An empty form, as at session start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a mutable slot for a numeric field, `None` for the symbol.
    pub fn numeric_mut(&mut self, field: Field) -> Option<&mut Option<Decimal>> {
        match field {
            Field::SymbolName => None,
            Field::InvestmentAmount => Some(&mut self.investment_amount),
            Field::RiskPercent => Some(&mut self.risk_percent),
            Field::RiskPrice => Some(&mut self.risk_price),
            Field::ProfitLimit => Some(&mut self.profit_limit),
            Field::BuyPrice => Some(&mut self.buy_price),
            Field::LossLimit => Some(&mut self.loss_limit),
        }
    }
}

/// A single `{name, value}` change event coming from an input widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub field: Field,
    /// The raw text as typed.
    pub value: String,
}

impl FieldUpdate {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl FromStr for FieldUpdate {
    type Err = CoreError;

    /// Parses `<field>=<value>`. The value may be empty, which clears the field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| CoreError::MalformedUpdate(s.to_string()))?;
        let field = name.parse::<Field>()?;
        Ok(Self::new(field, value.trim()))
    }
}

/// Upper bound on the decimal places the profit/loss ratio may be rounded to.
pub const MAX_RATIO_DECIMALS: u32 = 10;

/// Values derived from a `TradeParameters` snapshot. Never stored, always
/// recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Number of shares to buy so that hitting the stop loses `trade_risk`.
    pub trade_volume: Decimal,
    /// Currency amount at risk on the trade.
    pub trade_risk: Decimal,
    /// Capital needed to open the position.
    pub required_capital: Decimal,
    /// Profit if the take-profit price is reached.
    pub trade_profit: Decimal,
    /// Reward per unit of risk.
    pub profit_to_loss_ratio: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_parameters_are_empty() {
        let params = TradeParameters::new();
        assert!(params.symbol_name.is_empty());
        assert_eq!(params.investment_amount, None);
        assert_eq!(params.risk_percent, None);
        assert_eq!(params.loss_limit, None);
    }

    #[test]
    fn test_numeric_mut_targets_the_right_slot() {
        let mut params = TradeParameters::new();
        *params.numeric_mut(Field::BuyPrice).unwrap() = Some(dec!(1000));
        assert_eq!(params.buy_price, Some(dec!(1000)));
        assert!(params.numeric_mut(Field::SymbolName).is_none());
    }

    #[test]
    fn test_parse_field_update() {
        let update: FieldUpdate = "riskPercent=5".parse().unwrap();
        assert_eq!(update, FieldUpdate::new(Field::RiskPercent, "5"));

        let cleared: FieldUpdate = "buy_price =".parse().unwrap();
        assert_eq!(cleared, FieldUpdate::new(Field::BuyPrice, ""));
    }

    #[test]
    fn test_parse_field_update_errors() {
        assert_eq!(
            "riskPercent 5".parse::<FieldUpdate>(),
            Err(CoreError::MalformedUpdate("riskPercent 5".to_string()))
        );
        assert!(matches!(
            "foo=1".parse::<FieldUpdate>(),
            Err(CoreError::UnknownField(_))
        ));
    }

    #[test]
    fn test_parameters_serialize_camel_case() {
        let params = TradeParameters {
            symbol_name: "FOLD".to_string(),
            buy_price: Some(dec!(1000)),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["symbolName"], "FOLD");
        assert!(json["investmentAmount"].is_null());
    }
}
