//! Display formatting for catalog values; missing values render as "Unknown".

use chrono::{NaiveDate, NaiveDateTime};

pub const UNKNOWN: &str = "Unknown";

/// Plain number with trailing zeros trimmed (e.g. `1.5`, `300`)
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let formatted = format!("{v:.3}");
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            trimmed.to_string()
        }
        _ => UNKNOWN.to_string(),
    }
}

pub fn format_distance(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{} ly", format_number(Some(v))),
        _ => UNKNOWN.to_string(),
    }
}

pub fn format_temperature(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{} K", format_number(Some(v))),
        _ => UNKNOWN.to_string(),
    }
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

pub fn format_date(value: Option<NaiveDate>) -> String {
    match value {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => UNKNOWN.to_string(),
    }
}

pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M").to_string(),
        None => UNKNOWN.to_string(),
    }
}

pub fn format_text(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => UNKNOWN.to_string(),
    }
}
