use rust_decimal::Decimal;
use std::str::FromStr;

fn strip_currency_and_spaces(s: &str) -> String {
    s.replace(['₪', '$', '€'], "")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}

/// Best-effort amount parser for the decimal conventions found in bank exports.
///
/// Accepts accounting parentheses for negatives, US (`1,234.56`) and EU
/// (`1.234,56`) grouping, and a lone decimal comma (`12,5`). The input scale
/// is preserved, so `"-50.00"` comes back as `-50.00`.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let mut v = strip_currency_and_spaces(value);
    if v.is_empty() {
        return None;
    }

    let mut negative = false;
    if v.starts_with('(') && v.ends_with(')') {
        negative = true;
        v = v[1..v.len() - 1].trim().to_string();
    }

    match (v.rfind(','), v.rfind('.')) {
        // Whichever separator comes last is the decimal point.
        (Some(comma), Some(dot)) => {
            v = if comma > dot {
                v.replace('.', "").replace(',', ".")
            } else {
                v.replace(',', "")
            };
        }
        (Some(_), None) => {
            let parts: Vec<&str> = v.split(',').collect();
            let decimal_comma = parts.len() == 2 && matches!(parts[1].chars().count(), 1 | 2);
            v = if decimal_comma {
                v.replace(',', ".")
            } else {
                v.replace(',', "")
            };
        }
        _ => {}
    }

    v.retain(|c| c != ' ');
    let v = v.strip_prefix('+').unwrap_or(&v);

    let amount = Decimal::from_str(v).ok()?;
    Some(if negative { -amount } else { amount })
}

/// Canonical text form of an amount cell: the parsed decimal, or an empty
/// string when the cell cannot be read as a number.
pub fn amount_field(value: &str) -> String {
    parse_amount(value)
        .map(|d| d.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parse_amount_plain() {
        assert_eq!(parse_amount("123.45"), Some(dec("123.45")));
    }

    #[test]
    fn parse_amount_with_currency_symbols() {
        assert_eq!(parse_amount("₪ 99.90"), Some(dec("99.90")));
        assert_eq!(parse_amount("$5"), Some(dec("5")));
        assert_eq!(parse_amount("€12.00"), Some(dec("12.00")));
    }

    #[test]
    fn parse_amount_us_grouping() {
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
    }

    #[test]
    fn parse_amount_eu_grouping() {
        assert_eq!(parse_amount("1.234,56"), Some(dec("1234.56")));
    }

    #[test]
    fn parse_amount_decimal_comma() {
        assert_eq!(parse_amount("12,5"), Some(dec("12.5")));
        assert_eq!(parse_amount("12,50"), Some(dec("12.50")));
    }

    #[test]
    fn parse_amount_comma_as_thousands() {
        assert_eq!(parse_amount("1,234"), Some(dec("1234")));
        assert_eq!(parse_amount("1,234,567"), Some(dec("1234567")));
    }

    #[test]
    fn parse_amount_accounting_parens() {
        assert_eq!(parse_amount("(75.25)"), Some(dec("-75.25")));
    }

    #[test]
    fn parse_amount_signs() {
        assert_eq!(parse_amount("-50.00"), Some(dec("-50.00")));
        assert_eq!(parse_amount("+50"), Some(dec("50")));
    }

    #[test]
    fn parse_amount_nbsp_grouping() {
        assert_eq!(parse_amount("1\u{a0}000"), Some(dec("1000")));
    }

    #[test]
    fn parse_amount_invalid() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("()"), None);
    }

    #[test]
    fn amount_field_keeps_scale() {
        assert_eq!(amount_field("-50.00"), "-50.00");
        assert_eq!(amount_field("1,234.5"), "1234.5");
        assert_eq!(amount_field("n/a"), "");
    }
}
