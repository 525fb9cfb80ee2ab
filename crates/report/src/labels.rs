use configuration::Language;
use serde::Serialize;

/// Row labels, units and column headers of the summary view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub header_item: String,
    pub header_value: String,
    pub header_unit: String,
    pub date_time: String,
    pub symbol: String,
    pub trade_volume: String,
    pub trade_risk: String,
    pub required_capital: String,
    pub trade_profit: String,
    pub profit_limit: String,
    pub buy_price: String,
    pub loss_limit: String,
    pub profit_to_loss_ratio: String,
    pub volume_unit: String,
    pub currency_unit: String,
}

impl Labels {
    pub fn english() -> Self {
        Self {
            header_item: "Item".to_string(),
            header_value: "Value".to_string(),
            header_unit: "Unit".to_string(),
            date_time: "Date & time".to_string(),
            symbol: "Symbol".to_string(),
            trade_volume: "Trade volume".to_string(),
            trade_risk: "Trade risk".to_string(),
            required_capital: "Required capital".to_string(),
            trade_profit: "Trade profit".to_string(),
            profit_limit: "Profit limit".to_string(),
            buy_price: "Buy price".to_string(),
            loss_limit: "Loss limit".to_string(),
            profit_to_loss_ratio: "Profit/loss ratio".to_string(),
            volume_unit: "shares".to_string(),
            currency_unit: "IRR".to_string(),
        }
    }

    pub fn persian() -> Self {
        Self {
            header_item: "شرح".to_string(),
            header_value: "مقدار".to_string(),
            header_unit: "واحد".to_string(),
            date_time: "تاریخ و زمان".to_string(),
            symbol: "نام نماد".to_string(),
            trade_volume: "حجم معامله".to_string(),
            trade_risk: "ریسک معامله".to_string(),
            required_capital: "سرمایه مورد نیاز".to_string(),
            trade_profit: "سود سرمایه‌گذاری".to_string(),
            profit_limit: "حد سود".to_string(),
            buy_price: "قیمت خرید".to_string(),
            loss_limit: "حد ضرر".to_string(),
            profit_to_loss_ratio: "نسبت سود به ضرر".to_string(),
            volume_unit: "تعداد سهم".to_string(),
            currency_unit: "ریال".to_string(),
        }
    }

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self::english(),
            Language::Fa => Self::persian(),
        }
    }

    /// Replaces the currency unit when one is configured.
    pub fn with_currency(mut self, currency: Option<&str>) -> Self {
        if let Some(currency) = currency.filter(|c| !c.trim().is_empty()) {
            self.currency_unit = currency.trim().to_string();
        }
        self
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_selection() {
        assert_eq!(Labels::for_language(Language::En), Labels::english());
        assert_eq!(Labels::for_language(Language::Fa).currency_unit, "ریال");
    }

    #[test]
    fn test_with_currency_ignores_blank_override() {
        assert_eq!(Labels::english().with_currency(Some("USD")).currency_unit, "USD");
        assert_eq!(Labels::english().with_currency(Some("  ")).currency_unit, "IRR");
        assert_eq!(Labels::english().with_currency(None).currency_unit, "IRR");
    }
}
