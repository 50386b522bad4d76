//! Small display formatters shared by the view models.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Dec 15, 2024` (listing cards).
    Short,
    /// `December 15, 2024` (article header).
    Long,
}

/// Calendar date of an ISO-8601 timestamp, formatted for display.
///
/// The date is taken as written in the timestamp (no conversion to another
/// zone). Returns `None` for missing or unparseable input.
pub fn format_date(timestamp: Option<&str>, style: DateStyle) -> Option<String> {
    let date = parse_date(timestamp?.trim())?;
    let pattern = match style {
        DateStyle::Short => "%b %-d, %Y",
        DateStyle::Long => "%B %-d, %Y",
    };
    Some(date.format(pattern).to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `rgba(r, g, b, alpha)` for a `#rgb` or `#rrggbb` colour.
///
/// Anything else is returned unchanged so callers can still use it as a CSS
/// colour value.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {alpha})"),
        None => hex.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let full: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&full[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
