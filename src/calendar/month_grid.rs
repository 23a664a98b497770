//! The 12-month grid with cross-year range striping.

use crate::date::{DateValue, YEAR_FLOOR};

use super::{DisplayCursor, Selection, MONTH_LABELS};

// ---------------------------------------------------------------------------
// MonthCell / MonthGrid
// ---------------------------------------------------------------------------

/// One month cell; `index` 0 = January.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub index: u32,
    pub label: &'static str,
    /// Today's month in today's year.
    pub current: bool,
    pub endpoint: bool,
    pub in_range: bool,
}

/// The month grid for one display year, laid out 3 columns x 4 rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub cells: [MonthCell; 12],
}

impl MonthGrid {
    pub const COLUMNS: usize = 3;
    pub const ROWS: usize = 4;

    pub fn build(year: i32, selection: &Selection, today: DateValue) -> Self {
        let cells = std::array::from_fn(|i| cell(year, i as u32, selection, today));
        MonthGrid { year, cells }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&MonthCell> {
        if col >= Self::COLUMNS {
            return None;
        }
        self.cells.get(row * Self::COLUMNS + col)
    }
}

fn cell(year: i32, index: u32, selection: &Selection, today: DateValue) -> MonthCell {
    let month = index + 1;
    let (endpoint, in_range) = match selection {
        Selection::Single(sel) => (
            sel.is_some_and(|d| d.year() == year && d.month() == month),
            false,
        ),
        Selection::Range(range) => {
            let range = range.ordered();
            let matches = |d: DateValue| d.year() == year && d.month() == month;
            let endpoint =
                range.start.is_some_and(matches) || range.end.is_some_and(matches);
            let in_range = match (range.start, range.end) {
                (Some(start), Some(end)) => {
                    in_month_band(year, month, start, end) && !endpoint
                }
                _ => false,
            };
            (endpoint, in_range)
        }
    };
    MonthCell {
        index,
        label: MONTH_LABELS[index as usize],
        current: today.year() == year && today.month() == month,
        endpoint,
        in_range,
    }
}

/// Whether `month` of `year` lies inside the ordered `start..=end`
/// band. Four cases: both endpoints in the display year, the display
/// year opens the range, closes it, or sits strictly inside it.
fn in_month_band(year: i32, month: u32, start: DateValue, end: DateValue) -> bool {
    if start.year() == end.year() {
        year == start.year() && start.month() <= month && month <= end.month()
    } else if year == start.year() {
        month >= start.month()
    } else if year == end.year() {
        month <= end.month()
    } else {
        start.year() < year && year < end.year()
    }
}

// ---------------------------------------------------------------------------
// Keyboard stepping
// ---------------------------------------------------------------------------

/// Outcome of an arrow-key step in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Within { index: u32 },
    /// The step wrapped into an adjacent year.
    Across { year: i32, index: u32 },
    /// The step would cross the year floor.
    Blocked,
}

/// Step the focused month cell by `delta` cells (±1 horizontal, ±3
/// vertical), wrapping into the adjacent year on overflow.
pub fn step_month(year: i32, index: u32, delta: i32) -> MonthStep {
    let next = index as i32 + delta;
    if next < 0 {
        if year <= YEAR_FLOOR {
            return MonthStep::Blocked;
        }
        MonthStep::Across {
            year: year - 1,
            index: (next + 12) as u32,
        }
    } else if next > 11 {
        MonthStep::Across {
            year: year + 1,
            index: (next - 12) as u32,
        }
    } else {
        MonthStep::Within { index: next as u32 }
    }
}

/// The display cursor for a committed month cell.
pub fn commit_month(year: i32, index: u32) -> DisplayCursor {
    DisplayCursor::new(year, index + 1)
}

// ===========================================================================
// Tests
// ===========================================================================
