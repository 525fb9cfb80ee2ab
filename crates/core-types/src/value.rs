use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses numeric text as typed into a form field.
///
/// Thousands separators and blanks are dropped and Persian or Arabic-Indic
/// digits are read as their ASCII counterparts, so `"۱٬۰۰۰"` and `"1,000"`
/// both give `1000`. Returns `None` for empty or non-numeric text.
pub fn parse_numeric(raw: &str) -> Option<Decimal> {
    let normalized: String = raw
        .chars()
        .filter_map(|c| match c {
            ',' | '_' | '\'' | '\u{066C}' => None,
            c if c.is_whitespace() => None,
            '\u{066B}' => Some('.'),
            '\u{06F0}'..='\u{06F9}' => char::from_digit(c as u32 - 0x06F0, 10),
            '\u{0660}'..='\u{0669}' => char::from_digit(c as u32 - 0x0660, 10),
            c => Some(c),
        })
        .collect();

    if normalized.is_empty() {
        return None;
    }

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}
