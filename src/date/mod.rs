//! Date arithmetic: noon-canonical dates, text formats, ranges.
//!
//! Everything the widgets do with actual calendar dates lives here.
//! The rest of the crate treats [`DateValue`] as an opaque ordered day
//! and never touches chrono directly.

pub mod format;
pub mod range;
pub mod value;

pub use format::DateFormat;
pub use range::DateRange;
pub use value::{days_in_month, is_leap_year, normalize, parse_iso, DateValue, YEAR_FLOOR};

use thiserror::Error;

// ---------------------------------------------------------------------------
// DateError
// ---------------------------------------------------------------------------

/// Why a date string or range failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The text does not match the expected pattern or names no real
    /// calendar date.
    #[error("unrecognized date {text:?} (expected {expected})")]
    Malformed { text: String, expected: String },

    /// The year falls below the supported floor.
    #[error("year {year} is before {floor}", floor = YEAR_FLOOR)]
    BeforeYearFloor { year: i32 },

    /// The date lies outside the configured min/max bounds.
    #[error("date {date} is outside the allowed bounds")]
    OutOfBounds { date: DateValue },

    /// A range where only one endpoint is filled in.
    #[error("incomplete range: both start and end are required")]
    IncompleteRange,
}
