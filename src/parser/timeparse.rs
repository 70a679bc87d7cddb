//! Relative-time normalization
//!
//! Listing pages show inquiry times as free-text phrases like "12 days ago"
//! or "Posted 1 Hour before". This module turns them into absolute calendar
//! dates relative to the crawl time.

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::DATE_FORMAT;

lazy_static! {
    static ref RELATIVE_TIME: Regex =
        Regex::new(r"(\d+)\s*(hour|hours|day|days|week|weeks|month|months)")
            .expect("Invalid relative-time pattern");
}

/// Convert a supported time unit to days.
///
/// Months use a fixed 30-day approximation, not calendar arithmetic.
fn unit_to_days(unit: &str) -> Option<f64> {
    match unit {
        "hour" | "hours" => Some(1.0 / 24.0),
        "day" | "days" => Some(1.0),
        "week" | "weeks" => Some(7.0),
        "month" | "months" => Some(30.0),
        _ => None,
    }
}

/// Normalize a relative-time phrase into an absolute `DD-MM-YYYY` date.
///
/// The `<number><unit>` pattern may appear anywhere in the input and is
/// matched case-insensitively. Normalization is best-effort: input that is
/// unparseable, or whose offset leaves the representable date range, is
/// returned trimmed and lower-cased, never an error or a panic. Empty input
/// yields an empty string.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rfqcrawl::parser::timeparse::normalize_relative_time;
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();
/// assert_eq!(normalize_relative_time("12 days ago", now), "08-01-2024");
/// assert_eq!(normalize_relative_time("yesterday", now), "yesterday");
/// ```
#[must_use]
pub fn normalize_relative_time(text: &str, now: DateTime<Utc>) -> String {
    let cleaned = text.trim().to_lowercase();
    if cleaned.is_empty() {
        return cleaned;
    }

    if let Some(cap) = RELATIVE_TIME.captures(&cleaned) {
        if let Ok(number) = cap[1].parse::<u64>() {
            if let Some(days_per_unit) = unit_to_days(&cap[2]) {
                // Checked arithmetic: a number large enough to leave the
                // representable date range falls through to the passthrough
                let seconds = (number as f64 * days_per_unit * 86_400.0) as i64;
                let target = Duration::try_seconds(seconds)
                    .and_then(|delta| now.checked_sub_signed(delta));
                if let Some(target) = target {
                    return target.format(DATE_FORMAT).to_string();
                }
            }
        }
    }

    cleaned
}
