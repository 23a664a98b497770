//! DateValue: a calendar date pinned to a canonical noon instant.
//!
//! All comparisons in the crate go through [`DateValue`], so two dates
//! compare equal exactly when their noon timestamps do. Fixing the
//! time-of-day to 12:00 keeps day arithmetic immune to DST boundary
//! artifacts when a host converts to zoned time.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::DateError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Earliest year the widgets will parse, render, or navigate to.
pub const YEAR_FLOOR: i32 = 1900;

/// Days per month in a non-leap year, January first.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// ---------------------------------------------------------------------------
// DateValue
// ---------------------------------------------------------------------------

/// A calendar date at the canonical noon wall-clock instant.
///
/// Ordering and equality agree with comparing [`timestamp_millis`]
/// values, since every `DateValue` shares the same time-of-day.
///
/// [`timestamp_millis`]: DateValue::timestamp_millis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateValue(NaiveDate);

impl DateValue {
    /// Create a date from calendar fields, `None` if they name no real
    /// day (e.g. February 31st).
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today according to the local wall clock.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 = January.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday column with Sunday as 0, matching the day grid layout.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// The canonical 12:00:00 instant of this date.
    pub fn at_noon(&self) -> NaiveDateTime {
        self.0.and_time(noon())
    }

    /// Epoch milliseconds of the canonical noon instant (read as UTC).
    pub fn timestamp_millis(&self) -> i64 {
        self.at_noon().and_utc().timestamp_millis()
    }

    /// Step by whole days. `None` past the ends of chrono's range.
    pub fn offset_days(&self, days: i64) -> Option<Self> {
        let stepped = if days >= 0 {
            self.0.checked_add_days(chrono::Days::new(days as u64))?
        } else {
            self.0.checked_sub_days(chrono::Days::new(days.unsigned_abs()))?
        };
        Some(Self(stepped))
    }

    /// Render through a chrono strftime pattern.
    pub fn format_with(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }

    /// Spoken-form label, e.g. `"Friday, March 18, 2022"`.
    pub fn long_label(&self) -> String {
        self.format_with("%A, %B %-d, %Y")
    }
}

impl std::fmt::Display for DateValue {
    /// ISO `YYYY-MM-DD`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Drop the time-of-day from a timestamp, keeping the calendar date.
///
/// Idempotent through [`DateValue::at_noon`]:
/// `normalize(normalize(dt).at_noon()) == normalize(dt)`.
pub fn normalize(dt: NaiveDateTime) -> DateValue {
    DateValue(dt.date())
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1 = January).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month));
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[(month.clamp(1, 12) - 1) as usize]
    }
}

/// Parse a config bound: plain `YYYY-MM-DD` or a full RFC 3339
/// timestamp, either way normalized to the named calendar day.
pub fn parse_iso(text: &str) -> Result<DateValue, DateError> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(DateValue(date));
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(text) {
        return Ok(normalize(stamp.naive_local()));
    }
    Err(DateError::Malformed {
        text: text.to_owned(),
        expected: "YYYY-MM-DD or RFC 3339".to_owned(),
    })
}

// ===========================================================================
// Tests
// ===========================================================================
