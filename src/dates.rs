// src/dates.rs
//! Date normalizer: turns the date text boards render ("2 days ago",
//! "Just posted", "Aug 15, 2026", ...) into an absolute UTC timestamp,
//! or `None` for "unknown".
//!
//! `now` is passed in explicitly so the policy is deterministic in tests.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use once_cell::sync::OnceCell;
use regex::Regex;

/// Markers that mean "posted right now".
const FRESH_MARKERS: &[&str] = &["today", "just now", "new", "just posted"];

/// Absolute formats tried in order after the relative branches fail.
const ABSOLUTE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

#[derive(Clone, Copy)]
enum Unit {
    Days,
    Weeks,
    Months,
    Hours,
}

impl Unit {
    fn span(self, value: i64) -> Duration {
        match self {
            Unit::Days => Duration::days(value),
            Unit::Weeks => Duration::weeks(value),
            // month is approximated as exactly 30 days; kept for parity,
            // not calendar math
            Unit::Months => Duration::days(value * 30),
            Unit::Hours => Duration::hours(value),
        }
    }
}

/// Relative patterns in fixed priority order: day, week, month, hour.
/// The first match wins even if a later pattern would also match; that
/// tie-break is part of the contract.
fn unit_patterns() -> &'static [(Regex, Unit)] {
    static PATTERNS: OnceCell<Vec<(Regex, Unit)>> = OnceCell::new();
    PATTERNS.get_or_init(|| {
        vec![
            (
                Regex::new(r"(\d+)\s*(?:day|d)\s*(?:ago)?").unwrap(),
                Unit::Days,
            ),
            (
                Regex::new(r"(\d+)\s*(?:week|w)\s*(?:ago)?").unwrap(),
                Unit::Weeks,
            ),
            (
                Regex::new(r"(\d+)\s*(?:month|mo)\s*(?:ago)?").unwrap(),
                Unit::Months,
            ),
            (
                Regex::new(r"(\d+)\s*(?:hour|hr|h)\s*(?:ago)?").unwrap(),
                Unit::Hours,
            ),
        ]
    })
}

/// Normalize raw date text to an absolute timestamp. Policy order, first
/// match wins: fresh markers, "yesterday", relative `N unit [ago]`,
/// absolute formats, else unknown.
pub fn parse_posted_at(now: DateTime<Utc>, raw: &str) -> Option<DateTime<Utc>> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if FRESH_MARKERS.iter().any(|m| text.contains(m)) {
        return Some(now);
    }

    if text.contains("yesterday") {
        return Some(now - Duration::days(1));
    }

    for (re, unit) in unit_patterns() {
        if let Some(caps) = re.captures(&text) {
            if let Ok(value) = caps[1].parse::<i64>() {
                return Some(now - unit.span(value));
            }
        }
    }

    for fmt in ABSOLUTE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&text, fmt) {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    None
}

/// Recency test: unknown dates pass by default; known dates must fall
/// within the trailing window, boundary inclusive.
pub fn is_recent(now: DateTime<Utc>, posted_at: Option<DateTime<Utc>>, window_days: i64) -> bool {
    match posted_at {
        None => true,
        Some(d) => d >= now - Duration::days(window_days),
    }
}
