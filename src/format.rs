//! Number formatting for display strings.

/// Bytes as megabytes with two decimals, e.g. `2.50`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0 / 1024.0)
}

/// Dollar amount with thousands separators and up to two decimals,
/// e.g. `$4,821.32`, `$4,234`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if frac == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, frac)
    }
}

/// Percentage without a trailing `.0`, e.g. `14.3%`, `9%`.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}%", rounded as i64)
    } else {
        format!("{:.1}%", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.00");
        assert_eq!(format_megabytes(1_048_576), "1.00");
        assert_eq!(format_megabytes(524_288), "0.50");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(4821.32), "$4,821.32");
        assert_eq!(format_currency(32.79), "$32.79");
        assert_eq!(format_currency(4234.0), "$4,234");
        assert_eq!(format_currency(1_234_567.5), "$1,234,567.50");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(14.3), "14.3%");
        assert_eq!(format_percent(9.0), "9%");
        assert_eq!(format_percent(100.0), "100%");
    }
}
