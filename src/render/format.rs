//! Display formatting shared by the cards and pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DEFAULT_DESTINATION_IMAGE: &str =
    "https://images.pexels.com/photos/3278215/pexels-photo-3278215.jpeg";
pub const DEFAULT_STATE_IMAGE: &str =
    "https://images.pexels.com/photos/2387532/pexels-photo-2387532.jpeg";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
pub const DEFAULT_LOCATION: &str = "Nigeria";
pub const DEFAULT_COST: &str = "Varies";
pub const DEFAULT_BEST_TIME: &str = "Year-round";

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Destination rating with exactly one decimal, halves rounded away from zero (4.25 -> "4.3").
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", (rating * 10.0).round() / 10.0)
}

/// Five-glyph star string for a review rating.
///
/// The rating is rounded to the nearest whole star and clamped to 0..=5, so the string is always
/// five glyphs long.
pub fn stars(rating: f64) -> String {
    let filled = if rating.is_finite() {
        rating.round().clamp(0.0, 5.0) as usize
    } else {
        0
    };
    let mut out = String::with_capacity(5 * FILLED_STAR.len_utf8());
    out.extend(std::iter::repeat(FILLED_STAR).take(filled));
    out.extend(std::iter::repeat(EMPTY_STAR).take(5 - filled));
    out
}

/// "1 Destination", otherwise "N Destinations".
pub fn destination_count_label(count: usize) -> String {
    if count == 1 {
        "1 Destination".to_string()
    } else {
        format!("{} Destinations", count)
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    // PostgreSQL text output, e.g. "2024-01-05 10:00:00.123+00"
    for format in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.date_naive());
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Long date such as "January 5, 2024". Text that isn't a recognizable date is returned as is.
pub fn format_long_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => {
            tracing::debug!(value, "unrecognized date");
            value.to_string()
        }
    }
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text, or the escaped default when the value is missing or blank.
pub fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape(v),
        _ => escape(default),
    }
}
