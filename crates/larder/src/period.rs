//! Free-text shelf-life period parsing.
//!
//! Guide entries carry periods as unstructured text ("2 weeks", "5 days",
//! "10～14 days"). This parser derives a numeric day count for autofill.
//! It is a convenience heuristic, not authoritative data: anything it
//! cannot recognize falls back to a one-week default.

use std::sync::OnceLock;

use regex::Regex;

/// Day count used when no pattern matches.
pub const DEFAULT_PERIOD_DAYS: u32 = 7;

/// One or two numbers followed by a day-unit token.
fn day_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)～?(\d+)?\s*(?:day|d)").expect("valid day pattern"))
}

/// One or two numbers followed by a week-unit token.
fn week_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)～?(\d+)?\s*(?:week|w)").expect("valid week pattern"))
}

/// Derive a day count from a free-text shelf-life period.
///
/// Looks for a day-unit pattern first, then a week-unit pattern (scaled by
/// seven). When a range like "10～14 days" is given, the second number is
/// preferred. Unrecognized text yields [`DEFAULT_PERIOD_DAYS`].
#[must_use]
pub fn parse_period_days(text: &str) -> u32 {
    if let Some(caps) = day_pattern().captures(text) {
        return range_upper(&caps);
    }
    if let Some(caps) = week_pattern().captures(text) {
        return range_upper(&caps) * 7;
    }
    DEFAULT_PERIOD_DAYS
}

/// Pick the second number of a range if present, else the first.
fn range_upper(caps: &regex::Captures<'_>) -> u32 {
    let first = caps
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_PERIOD_DAYS);
    caps.get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(first)
}
