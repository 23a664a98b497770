//! Date text formats: patterns, placeholders, masks, strict parsing.

use super::value::{DateValue, YEAR_FLOOR};
use super::DateError;

// ---------------------------------------------------------------------------
// DateFormat
// ---------------------------------------------------------------------------

/// Field order for formatted and typed dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    MonthDayYear,
    #[default]
    DayMonthYear,
    YearMonthDay,
}

impl DateFormat {
    /// Uppercase pattern, e.g. `"DD/MM/YYYY"`.
    pub const fn pattern(self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::YearMonthDay => "YYYY/MM/DD",
        }
    }

    /// Lowercased pattern shown while the field holds no date.
    pub const fn placeholder(self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "mm/dd/yyyy",
            DateFormat::DayMonthYear => "dd/mm/yyyy",
            DateFormat::YearMonthDay => "yyyy/mm/dd",
        }
    }

    /// Digit template for the masked input; `9` marks a digit slot,
    /// anything else is a literal.
    pub const fn mask(self) -> &'static str {
        match self {
            DateFormat::MonthDayYear | DateFormat::DayMonthYear => "99/99/9999",
            DateFormat::YearMonthDay => "9999/99/99",
        }
    }

    /// Placeholder for a range field: two placeholders joined.
    pub fn range_placeholder(self) -> String {
        format!("{0} - {0}", self.placeholder())
    }

    /// Mask for a range field: two masks joined by a literal `" - "`.
    pub fn range_mask(self) -> String {
        format!("{0} - {0}", self.mask())
    }

    /// Zero-padded rendering of `date` in this format.
    pub fn format(self, date: DateValue) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            DateFormat::MonthDayYear => format!("{m:02}/{d:02}/{y:04}"),
            DateFormat::DayMonthYear => format!("{d:02}/{m:02}/{y:04}"),
            DateFormat::YearMonthDay => format!("{y:04}/{m:02}/{d:02}"),
        }
    }

    /// `Some` renders as [`format`], `None` as the empty string.
    ///
    /// [`format`]: DateFormat::format
    pub fn format_opt(self, date: Option<DateValue>) -> String {
        date.map(|d| self.format(d)).unwrap_or_default()
    }

    /// Strict parse: exact field widths, `/` separators, a real
    /// calendar date. No clamping: `"31/02/2020"` is malformed.
    ///
    /// Real dates before the year floor fail with
    /// [`DateError::BeforeYearFloor`].
    pub fn parse(self, text: &str) -> Result<DateValue, DateError> {
        let malformed = || DateError::Malformed {
            text: text.to_owned(),
            expected: self.pattern().to_owned(),
        };

        let mut parts = text.split('/');
        let (Some(a), Some(b), Some(c), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let (year, month, day) = match self {
            DateFormat::MonthDayYear => (field(c, 4), field(a, 2), field(b, 2)),
            DateFormat::DayMonthYear => (field(c, 4), field(b, 2), field(a, 2)),
            DateFormat::YearMonthDay => (field(a, 4), field(b, 2), field(c, 2)),
        };
        let (Some(year), Some(month), Some(day)) = (year, month, day) else {
            return Err(malformed());
        };

        let date = DateValue::new(year as i32, month, day).ok_or_else(malformed)?;
        if date.year() < YEAR_FLOOR {
            return Err(DateError::BeforeYearFloor { year: date.year() });
        }
        Ok(date)
    }
}

/// A numeric field of exactly `width` ASCII digits.
fn field(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ===========================================================================
// Tests
// ===========================================================================
