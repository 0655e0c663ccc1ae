//! Small value conversions shared by the adapters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse the timestamp spellings providers use.
///
/// Accepts RFC 3339 (`2024-03-01T10:00:00Z`), a naive ISO date-time taken as
/// UTC (`2024-03-01T10:00:00`), or a bare date (`2024-03-01`).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Unix seconds to a UTC timestamp. Out-of-range values give `None`.
pub fn from_unix_seconds(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

/// Format a salary band for display, e.g. `USD 80,000 - 120,000 per year`.
pub fn format_salary(
    min: Option<f64>,
    max: Option<f64>,
    currency: Option<&str>,
    period: Option<&str>,
) -> Option<String> {
    let min = min.filter(|v| v.is_finite() && *v > 0.0);
    let max = max.filter(|v| v.is_finite() && *v > 0.0);

    let amount = match (min, max) {
        (Some(lo), Some(hi)) if (lo - hi).abs() < f64::EPSILON => format_amount(lo),
        (Some(lo), Some(hi)) => format!("{} - {}", format_amount(lo), format_amount(hi)),
        (Some(lo), None) => format!("{}+", format_amount(lo)),
        (None, Some(hi)) => format!("up to {}", format_amount(hi)),
        (None, None) => return None,
    };

    let mut out = match currency.map(str::trim).filter(|c| !c.is_empty()) {
        Some(currency) => format!("{currency} {amount}"),
        None => amount,
    };
    if let Some(period) = period.map(str::trim).filter(|p| !p.is_empty()) {
        out.push_str(" per ");
        out.push_str(&period.to_lowercase());
    }
    Some(out)
}

/// Round to a whole number and group thousands with commas.
fn format_amount(value: f64) -> String {
    let digits = (value.round() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
