//! pt-BR display formatting
//!
//! Currency and date formatting shared by every renderer, fixed to the
//! Brazilian locale the store runs in.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder for absent optional values
pub const NOT_AVAILABLE: &str = "N/A";

/// Currency symbol followed by a non-breaking space
const CURRENCY_PREFIX: &str = "R$\u{a0}";

/// Format a value as BRL, e.g. `1999.9` → `R$ 1.999,90`
///
/// Non-finite values render as zero.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{}{}{},{:02}",
        sign,
        CURRENCY_PREFIX,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}

/// Format a backend date as `dd/mm/yyyy`
///
/// Empty input renders [`NOT_AVAILABLE`]; input we cannot parse is shown as-is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    parse_date(raw)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Render an optional text field, falling back to [`NOT_AVAILABLE`] when
/// absent or blank
pub fn or_not_available(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1999.9), "R$\u{a0}1.999,90");
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(0.125), "R$\u{a0}0,13");
        assert_eq!(format_currency(1_234_567.0), "R$\u{a0}1.234.567,00");
        assert_eq!(format_currency(-42.5), "-R$\u{a0}42,50");
        assert_eq!(format_currency(f64::NAN), "R$\u{a0}0,00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05"), "05/03/2024");
        assert_eq!(format_date("2024-03-05 14:30:00"), "05/03/2024");
        assert_eq!(format_date("2024-03-05T14:30:00"), "05/03/2024");
        assert_eq!(format_date("2024-03-05T14:30:00-03:00"), "05/03/2024");
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("ontem"), "ontem");
    }

    #[test]
    fn test_or_not_available() {
        assert_eq!(or_not_available(Some("São Paulo")), "São Paulo");
        assert_eq!(or_not_available(Some("  ")), "N/A");
        assert_eq!(or_not_available(None), "N/A");
    }
}
