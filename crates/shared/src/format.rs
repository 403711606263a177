//! Display helpers shared by the desktop table and the CLI output.

use chrono::{DateTime, Local, NaiveDate};

pub const PARENT_ORGANIZATION_FALLBACK: &str = "Global Corp";
pub const MISSING_VALUE: &str = "-";
pub const INVALID_DATE: &str = "Invalid Date";

/// US-dollar rendering with thousands separators and two decimals. Absent or
/// non-finite amounts render as zero.
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = amount.filter(|value| value.is_finite()).unwrap_or(0.0);
    let cents = (amount.abs() * 100.0).round() as u128;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `M/D/YYYY` in local time. Accepts RFC 3339 timestamps and bare dates.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return MISSING_VALUE.to_string();
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp
            .with_timezone(&Local)
            .format("%-m/%-d/%Y")
            .to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }

    INVALID_DATE.to_string()
}

pub fn display_or_dash(value: Option<&str>) -> &str {
    non_empty(value).unwrap_or(MISSING_VALUE)
}

pub fn parent_organization_label(value: Option<&str>) -> &str {
    non_empty(value).unwrap_or(PARENT_ORGANIZATION_FALLBACK)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
