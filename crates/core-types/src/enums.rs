use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the seven input fields of the trade form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    SymbolName,
    InvestmentAmount,
    RiskPercent,
    RiskPrice,
    ProfitLimit,
    BuyPrice,
    LossLimit,
}

impl Field {
    /// All fields, in the order the form presents them.
    pub const ALL: [Field; 7] = [
        Field::SymbolName,
        Field::InvestmentAmount,
        Field::RiskPercent,
        Field::RiskPrice,
        Field::ProfitLimit,
        Field::BuyPrice,
        Field::LossLimit,
    ];

    /// The camelCase name used on the wire and in session commands.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::SymbolName => "symbolName",
            Field::InvestmentAmount => "investmentAmount",
            Field::RiskPercent => "riskPercent",
            Field::RiskPrice => "riskPrice",
            Field::ProfitLimit => "profitLimit",
            Field::BuyPrice => "buyPrice",
            Field::LossLimit => "lossLimit",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    /// Accepts camelCase, snake_case and kebab-case spellings, case-insensitively.
    /// `indexName` is the old form's name for the symbol field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "symbolname" | "symbol" | "indexname" => Ok(Field::SymbolName),
            "investmentamount" | "investment" => Ok(Field::InvestmentAmount),
            "riskpercent" => Ok(Field::RiskPercent),
            "riskprice" => Ok(Field::RiskPrice),
            "profitlimit" | "profit" => Ok(Field::ProfitLimit),
            "buyprice" | "buy" => Ok(Field::BuyPrice),
            "losslimit" | "loss" => Ok(Field::LossLimit),
            _ => Err(CoreError::UnknownField(s.trim().to_string())),
        }
    }
}
