use rust_decimal::{Decimal, RoundingStrategy};

/// Inserts a `,` every `group` digits of the integer part of a number.
///
/// The sign and anything from the decimal point on are left alone, so
/// `"-1234567.891"` becomes `"-1,234,567.891"`. Text that does not start with
/// digits is returned unchanged. A `group` of zero disables grouping.
pub fn group_thousands(text: &str, group: usize) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let split = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (integer, rest) = unsigned.split_at(split);

    if group == 0 || integer.len() <= group {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(text.len() + integer.len() / group);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % group == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(rest);
    grouped
}

/// Rounds to `decimals` places (half away from zero, like the ratio), drops
/// trailing zeros and groups thousands.
pub fn format_amount(value: Decimal, decimals: u32, group: usize) -> String {
    let rounded = value
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    group_thousands(&rounded.to_string(), group)
}

/// Formats an optional input value; empty fields render as an empty string.
pub fn format_input(value: Option<Decimal>, group: usize) -> String {
    value
        .map(|v| group_thousands(&v.normalize().to_string(), group))
        .unwrap_or_default()
}
