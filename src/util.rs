// Display helpers shared by the panel and scene components.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount the way an en-US price tag reads: thousands separators,
/// no fraction for whole amounts, at most two fraction digits otherwise.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// SVG attribute value for an opacity or coordinate; trims float noise.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 { "0".to_string() } else { rounded.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_whole_amounts() {
        assert_eq!(format_currency(dec!(0)), "0");
        assert_eq!(format_currency(dec!(850)), "850");
        assert_eq!(format_currency(dec!(14280)), "14,280");
        assert_eq!(format_currency(dec!(5712.0)), "5,712");
        assert_eq!(format_currency(dec!(1234567)), "1,234,567");
    }

    #[test]
    fn currency_fractions() {
        assert_eq!(format_currency(dec!(6894.72)), "6,894.72");
        assert_eq!(format_currency(dec!(19950.72)), "19,950.72");
        assert_eq!(format_currency(dec!(12.5)), "12.5");
        assert_eq!(format_currency(dec!(0.125)), "0.13");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(format_currency(dec!(-1500.5)), "-1,500.5");
    }

    #[test]
    fn numbers_for_svg() {
        assert_eq!(format_number(0.29999999999999993), "0.3");
        assert_eq!(format_number(0.04000000000000001), "0.04");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(97.5), "97.5");
        assert_eq!(format_number(300.0), "300");
    }
}
