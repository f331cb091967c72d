//! Strict date / date-time recognition for string scalars.
//!
//! Only exact shapes are accepted, and every shape match must also survive a
//! calendar validity check. No free-form or locale parsing is attempted.
use chrono::{DateTime, NaiveDate, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemporalKind {
    /// `datetime.date`
    Date,
    /// `datetime.datetime`
    DateTime,
    /// anything else
    Text,
}

impl TemporalKind {
    pub fn is_temporal(self) -> bool {
        !matches!(self, TemporalKind::Text)
    }

    /// Name exported by Python's `datetime` module for this kind.
    pub fn python_name(self) -> &'static str {
        match self {
            TemporalKind::Date => "date",
            TemporalKind::DateTime => "datetime",
            TemporalKind::Text => "str",
        }
    }
}

// ------------------------------- Patterns --------------------------------- //

/// (shape, chrono format used for the validity gate)
static DATE_PATTERNS: Lazy<[(Regex, &'static str); 2]> = Lazy::new(|| {
    [
        (Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(), "%Y-%m-%d"),
        (Regex::new(r"^\d{4}/\d{2}/\d{2}$").unwrap(), "%Y/%m/%d"),
    ]
});

/// Broad ISO-8601 `T` form; zone is optional and may omit the colon.
static ISO_DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:?\d{2})?$").unwrap()
});

/// The two forms that actually classify as date-time: `Z` or `±HH:MM`.
static STRICT_DATETIME_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?Z$").unwrap(),
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?[+-]\d{2}:\d{2}$").unwrap(),
    ]
});

// ------------------------------- Classify --------------------------------- //

pub fn classify(text: &str) -> TemporalKind {
    for (pattern, format) in DATE_PATTERNS.iter() {
        if pattern.is_match(text) && NaiveDate::parse_from_str(text, format).is_ok() {
            return TemporalKind::Date;
        }
    }

    if ISO_DATETIME.is_match(text) {
        let strict = STRICT_DATETIME_PATTERNS.iter().any(|p| p.is_match(text));
        // chrono keeps `:60` as a leap second; Python's datetime rejects it
        let valid = DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.nanosecond() < 1_000_000_000)
            .unwrap_or(false);
        if strict && valid {
            return TemporalKind::DateTime;
        }
        tracing::trace!(text, "ISO-shaped string without a usable zone, keeping str");
    }

    TemporalKind::Text
}

// ------------------------------- Tests ------------------------------------ //
