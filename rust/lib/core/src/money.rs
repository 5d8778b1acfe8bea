//! Turkish-locale money parsing and formatting.
//!
//! The accounting reports this system imports from use the tr-TR
//! convention: `.` as the thousands separator and `,` as the decimal
//! separator (`38.922,78`). Amounts are stored as plain `f64` and only
//! formatted back to locale form for display and reminder messages.

/// Parse a tr-TR formatted currency string into a number.
///
/// Strips thousands dots, converts the decimal comma to a dot, then
/// drops every character outside `[0-9.-]` before parsing. Empty or
/// unparsable input yields `0.0` — import rows never fail on a bad
/// monetary cell.
pub fn parse_money(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // Order matters: all dots are thousands separators until the
    // decimal comma has been converted.
    let cleaned: String = trimmed
        .replace('.', "")
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Format an amount in tr-TR convention with two decimals:
/// `38922.78` → `"38.922,78"`.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{},{:02}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_turkish_grouping() {
        assert_eq!(parse_money("38.922,78"), 38922.78);
        assert_eq!(parse_money("1.451,86"), 1451.86);
        assert_eq!(parse_money("0"), 0.0);
    }

    #[test]
    fn parse_with_currency_noise() {
        assert_eq!(parse_money("₺1.250,00"), 1250.0);
        assert_eq!(parse_money(" 500,50 TL"), 500.5);
    }

    #[test]
    fn parse_garbage_is_zero() {
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("abc"), 0.0);
        assert_eq!(parse_money("   "), 0.0);
    }

    #[test]
    fn parse_negative() {
        assert_eq!(parse_money("-1.200,50"), -1200.5);
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_money(38922.78), "38.922,78");
        assert_eq!(format_money(1451.86), "1.451,86");
        assert_eq!(format_money(1234567.8), "1.234.567,80");
    }

    #[test]
    fn format_small_amounts() {
        assert_eq!(format_money(0.0), "0,00");
        assert_eq!(format_money(7.5), "7,50");
        assert_eq!(format_money(999.99), "999,99");
    }

    #[test]
    fn format_negative() {
        assert_eq!(format_money(-1200.5), "-1.200,50");
    }

    #[test]
    fn roundtrip_stays_stable() {
        let formatted = format_money(parse_money("12.345,67"));
        assert_eq!(formatted, "12.345,67");
    }
}
