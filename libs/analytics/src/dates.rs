//! Lenient date parsing for certificate expiry and equipment timestamps.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, Timelike};

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// A point in time as written in the data: with or without a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Accepts RFC 3339 (`Z` or numeric offset), a naive ISO date-time with
    /// `T` or space separator, or a bare date (read as midnight).
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
            return Some(Timestamp::Zoned(zoned));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
                return Some(Timestamp::Naive(naive));
            }
        }
        parse_calendar_date(value)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Timestamp::Naive)
    }

    pub fn plus_days(self, days: i64) -> Self {
        match self {
            Timestamp::Zoned(t) => Timestamp::Zoned(t + Duration::days(days)),
            Timestamp::Naive(t) => Timestamp::Naive(t + Duration::days(days)),
        }
    }

    /// ISO 8601 rendering: seconds always, microseconds only when non-zero,
    /// offset as `+HH:MM` when zoned.
    pub fn to_iso_string(&self) -> String {
        match self {
            Timestamp::Zoned(t) => {
                format!("{}{}", iso_local(&t.naive_local()), t.format("%:z"))
            }
            Timestamp::Naive(t) => iso_local(t),
        }
    }
}

fn iso_local(t: &NaiveDateTime) -> String {
    let base = t.format("%Y-%m-%dT%H:%M:%S").to_string();
    let micros = t.nanosecond() / 1_000;
    if micros == 0 {
        base
    } else {
        format!("{base}.{micros:06}")
    }
}
