//! Display formatting for prices, volumes, changes, and timestamps
//!
//! Mirrors what the backend's quotes carry: amounts arrive tagged with an
//! ISO currency code, London-listed tickers quote in pence (`GBp`) and are
//! displayed converted to pounds.

use chrono::{DateTime, Utc};

/// Display symbol for an ISO currency code; unknown codes display as-is
pub fn currency_symbol(currency: &str) -> &str {
    match currency {
        "USD" => "$",
        "GBP" => "£",
        "EUR" => "€",
        "JPY" | "CNY" => "¥",
        "CAD" => "C$",
        "AUD" => "A$",
        "CHF" => "CHF",
        "HKD" => "HK$",
        "SGD" => "S$",
        "INR" => "₹",
        "KRW" => "₩",
        "BRL" => "R$",
        "MXN" => "MX$",
        "RUB" => "₽",
        "ZAR" => "R",
        "NOK" | "SEK" | "DKK" => "kr",
        "PLN" => "zł",
        "TRY" => "₺",
        "ILS" => "₪",
        // Pence
        "GBp" => "p",
        other => other,
    }
}

/// Format a number with two-decimal precision and thousands separators
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Compact K/M/B/T form for large magnitudes; values under 1000 keep the
/// plain form
pub fn format_compact(value: f64, decimals: usize) -> String {
    const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

    if value.abs() < 1000.0 {
        return format_number(value, decimals);
    }

    let magnitude = ((value.abs().log10() / 3.0).floor() as usize).min(SUFFIXES.len() - 1);
    let scaled = value / 1000_f64.powi(magnitude as i32);
    format!("{scaled:.decimals$}{}", SUFFIXES[magnitude])
}

/// Price with its currency symbol; GBp amounts are pence and display as
/// pounds
pub fn format_price(price: f64, currency: &str) -> String {
    if currency == "GBp" {
        return format!("£{}", format_number(price / 100.0, 2));
    }

    format!("{}{}", currency_symbol(currency), format_number(price, 2))
}

/// Share volume in compact form
pub fn format_volume(volume: u64) -> String {
    format_compact(volume as f64, 0)
}

/// Absolute and percent change with an explicit sign on gains
pub fn format_change(change: f64, change_percent: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{change:.2} ({sign}{change_percent:.2}%)")
}

/// Relative-time display for an RFC 3339 timestamp; unparsable input is
/// shown as-is
pub fn format_time_ago(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(then) => time_ago(then.with_timezone(&Utc), Utc::now()),
        Err(_) => timestamp.to_string(),
    }
}

fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return plural(days, "day");
    }

    let weeks = days / 7;
    if weeks < 4 {
        return plural(weeks, "week");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }

    plural(days / 365, "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(999.5, 2), "999.50");
        assert_eq!(format_number(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number(12.0, 0), "12");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0, 0), "950");
        assert_eq!(format_compact(1_500.0, 1), "1.5K");
        assert_eq!(format_compact(2_400_000.0, 1), "2.4M");
        assert_eq!(format_compact(3_100_000_000.0, 1), "3.1B");
        assert_eq!(format_compact(7_000_000_000_000.0, 1), "7.0T");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(178.5, "USD"), "$178.50");
        assert_eq!(format_price(1234.5, "EUR"), "€1,234.50");
        assert_eq!(format_price(150.0, "XYZ"), "XYZ150.00");
    }

    #[test]
    fn test_format_price_pence_displays_as_pounds() {
        assert_eq!(format_price(250.0, "GBp"), "£2.50");
    }

    #[test]
    fn test_format_change_signs() {
        assert_eq!(format_change(1.234, 0.567), "+1.23 (+0.57%)");
        assert_eq!(format_change(-2.5, -1.1), "-2.50 (-1.10%)");
        assert_eq!(format_change(0.0, 0.0), "+0.00 (+0.00%)");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(51_000_000), "51M");
        assert_eq!(format_volume(999), "999");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let at = |secs: i64| now - chrono::Duration::seconds(secs);

        assert_eq!(time_ago(at(30), now), "Just now");
        assert_eq!(time_ago(at(90), now), "1 minute ago");
        assert_eq!(time_ago(at(45 * 60), now), "45 minutes ago");
        assert_eq!(time_ago(at(3 * 3600), now), "3 hours ago");
        assert_eq!(time_ago(at(2 * 86_400), now), "2 days ago");
        assert_eq!(time_ago(at(10 * 86_400), now), "1 week ago");
        assert_eq!(time_ago(at(40 * 86_400), now), "1 month ago");
        assert_eq!(time_ago(at(800 * 86_400), now), "2 years ago");
    }

    #[test]
    fn test_format_time_ago_fallback() {
        assert_eq!(format_time_ago("yesterday-ish"), "yesterday-ish");
    }
}
