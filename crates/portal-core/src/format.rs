//! Display formatting shared by the page renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown for absent values.
pub const DASH: &str = "—";

/// Parses the server's timestamp formats: `YYYY-MM-DD HH:MM:SS`, RFC 3339
/// or a bare date.
fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `dd.mm.yyyy`, or the raw string when it cannot be parsed.
pub fn short_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Long form used in the dashboard header, e.g. `Saturday, 18 October 2026`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// `"{price} ₽"`, or a dash when the price is not set yet.
pub fn price(value: Option<f64>) -> String {
    match value {
        Some(p) if p.fract() == 0.0 => format!("{} ₽", p as i64),
        Some(p) => format!("{} ₽", p),
        None => DASH.to_string(),
    }
}

/// The value itself, or a fallback when it is absent or empty.
pub fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date_formats() {
        assert_eq!(short_date("2024-05-01 10:00:00"), "01.05.2024");
        assert_eq!(short_date("2024-12-31T23:59:00+03:00"), "31.12.2024");
        assert_eq!(short_date("2024-02-29"), "29.02.2024");
        assert_eq!(short_date("yesterday"), "yesterday");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(long_date(date), "Sunday, 18 October 2026");
    }

    #[test]
    fn test_price() {
        assert_eq!(price(Some(15000.0)), "15000 ₽");
        assert_eq!(price(Some(999.5)), "999.5 ₽");
        assert_eq!(price(None), DASH);
    }

    #[test]
    fn test_or_fallback() {
        assert_eq!(or_fallback(Some("House"), "Not specified"), "House");
        assert_eq!(or_fallback(Some(""), "Not specified"), "Not specified");
        assert_eq!(or_fallback(None, DASH), DASH);
    }
}
