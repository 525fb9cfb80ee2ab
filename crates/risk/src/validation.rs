use core_types::{Field, TradeParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Soft error indicators for the form. They are shown next to a field and
/// never change any value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFlags {
    /// `risk_percent` is outside `0..=100`.
    pub risk_percent_out_of_range: bool,
    /// `risk_price` is larger than the investment amount.
    pub risk_price_exceeds_investment: bool,
}

impl FieldFlags {
    pub fn is_flagged(&self, field: Field) -> bool {
        match field {
            Field::RiskPercent => self.risk_percent_out_of_range,
            Field::RiskPrice => self.risk_price_exceeds_investment,
            _ => false,
        }
    }

    /// The flagged fields in form order.
    pub fn flagged_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.is_flagged(*field))
            .collect()
    }
}

/// Checks the display-only bounds on a snapshot.
///
/// An empty investment amount counts as zero, so any positive risk price is
/// flagged until capital is entered.
pub fn validate(params: &TradeParameters) -> FieldFlags {
    let risk_percent_out_of_range = params
        .risk_percent
        .is_some_and(|p| p < Decimal::ZERO || p > dec!(100));
    let risk_price_exceeds_investment = params
        .risk_price
        .is_some_and(|r| r > params.investment_amount.unwrap_or(Decimal::ZERO));

    FieldFlags {
        risk_percent_out_of_range,
        risk_price_exceeds_investment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_metrics;
    use crate::form::update_field;

    #[test]
    fn test_valid_form_has_no_flags() {
        let p = update_field(&TradeParameters::new(), Field::InvestmentAmount, "1000");
        let p = update_field(&p, Field::RiskPercent, "100");
        let flags = validate(&p);
        assert_eq!(flags, FieldFlags::default());
        assert!(flags.flagged_fields().is_empty());
    }

    #[test]
    fn test_risk_percent_bounds() {
        let over = update_field(&TradeParameters::new(), Field::RiskPercent, "101");
        assert!(validate(&over).risk_percent_out_of_range);

        let under = update_field(&TradeParameters::new(), Field::RiskPercent, "-1");
        assert!(validate(&under).risk_percent_out_of_range);

        let zero = update_field(&TradeParameters::new(), Field::RiskPercent, "0");
        assert!(!validate(&zero).risk_percent_out_of_range);
    }

    #[test]
    fn test_risk_price_above_investment_is_flagged_but_used() {
        let p = update_field(&TradeParameters::new(), Field::InvestmentAmount, "1000");
        let p = update_field(&p, Field::RiskPrice, "2000");
        let p = update_field(&p, Field::BuyPrice, "100");
        let p = update_field(&p, Field::LossLimit, "90");
        let p = update_field(&p, Field::ProfitLimit, "130");

        let flags = validate(&p);
        assert!(flags.risk_price_exceeds_investment);
        assert_eq!(flags.flagged_fields(), vec![Field::RiskPercent, Field::RiskPrice]);
        // 2000 / 1000 * 100 = 200%, so the percent is out of range too.
        assert_eq!(p.risk_percent, Some(dec!(200)));

        let metrics = compute_metrics(&p);
        assert_eq!(metrics.trade_volume, dec!(200));
        assert_eq!(metrics.trade_profit, dec!(6000));
    }

    #[test]
    fn test_risk_price_without_investment_is_flagged() {
        let p = update_field(&TradeParameters::new(), Field::RiskPrice, "10");
        let flags = validate(&p);
        assert!(flags.risk_price_exceeds_investment);
        assert!(!flags.risk_percent_out_of_range);
    }

    #[test]
    fn test_percent_synced_against_missing_capital_stays_unflagged() {
        for investment in ["", "0"] {
            let p = update_field(&TradeParameters::new(), Field::InvestmentAmount, investment);
            let p = update_field(&p, Field::RiskPrice, "500");
            let flags = validate(&p);

            assert_eq!(p.risk_percent, None);
            assert!(!flags.risk_percent_out_of_range);
            assert!(flags.risk_price_exceeds_investment);
        }
    }

    #[test]
    fn test_empty_fields_are_never_flagged() {
        assert_eq!(validate(&TradeParameters::new()), FieldFlags::default());
    }
}
