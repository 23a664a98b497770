//! Calendar state shared by the day, month, and year grids.

pub mod day_grid;
pub mod month_grid;
pub mod year_grid;

pub use day_grid::{step_day, DayCell, DayGrid, DayStep};
pub use month_grid::{commit_month, step_month, MonthCell, MonthGrid, MonthStep};
pub use year_grid::{step_year, YearCell, YearGrid, YearStep, YearWindow};

use crate::date::{days_in_month, DateRange, DateValue, YEAR_FLOOR};

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Weekday column headers, Sunday first.
pub const DAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Month cell labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ---------------------------------------------------------------------------
// SelectionMode / Selection
// ---------------------------------------------------------------------------

/// Which kind of value a picker instance selects. Fixed for the
/// lifetime of the instance by its config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// The committed (or in-progress) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(Option<DateValue>),
    Range(DateRange),
}

impl Selection {
    /// The empty selection for a mode.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Range => Selection::Range(DateRange::EMPTY),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Range(_) => SelectionMode::Range,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(d) => d.is_none(),
            Selection::Range(r) => r.is_empty(),
        }
    }

    /// The date the calendar focuses and displays for this selection:
    /// the single date, or a range's end (else its start).
    pub fn anchor(&self) -> Option<DateValue> {
        match self {
            Selection::Single(d) => *d,
            Selection::Range(r) => r.end.or(r.start),
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayCursor
// ---------------------------------------------------------------------------

/// The month shown in the day grid. Its year feeds the month grid, and
/// the year grid shows the 12-year window containing that year.
///
/// Held as year/month fields rather than a date so stepping can never
/// produce day-overflow artifacts. Changing the cursor never alters the
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCursor {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
}

impl DisplayCursor {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self {
            year: year.max(YEAR_FLOOR),
            month: month.clamp(1, 12),
        }
    }

    pub fn from_date(date: DateValue) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The first day of the shown month.
    pub fn first_day(&self) -> DateValue {
        DateValue::new(self.year, self.month, 1).unwrap_or_default()
    }

    /// A day within the shown month, `None` if the month is shorter.
    pub fn date(&self, day: u32) -> Option<DateValue> {
        DateValue::new(self.year, self.month, day)
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Previous month, `None` when that would cross the year floor.
    pub fn prev_month(&self) -> Option<DisplayCursor> {
        if self.month == 1 {
            (self.year > YEAR_FLOOR).then(|| DisplayCursor {
                year: self.year - 1,
                month: 12,
            })
        } else {
            Some(DisplayCursor {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    pub fn next_month(&self) -> DisplayCursor {
        if self.month == 12 {
            DisplayCursor {
                year: self.year + 1,
                month: 1,
            }
        } else {
            DisplayCursor {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Previous year, `None` at the year floor.
    pub fn prev_year(&self) -> Option<DisplayCursor> {
        (self.year > YEAR_FLOOR).then(|| DisplayCursor {
            year: self.year - 1,
            month: self.month,
        })
    }

    pub fn next_year(&self) -> DisplayCursor {
        DisplayCursor {
            year: self.year + 1,
            month: self.month,
        }
    }

    /// Day-view header title, e.g. `"March 2022"`.
    pub fn title(&self) -> String {
        self.first_day().format_with("%B %Y")
    }
}

// ===========================================================================
// Tests
// ===========================================================================
