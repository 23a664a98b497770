//! The 12-year windowed grid.

use crate::date::{DateValue, YEAR_FLOOR};

use super::Selection;

// ---------------------------------------------------------------------------
// YearWindow
// ---------------------------------------------------------------------------

/// A 12-year page of the year grid. Pages tile upward from the year
/// floor: 1900-1911, 1912-1923, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub first: i32,
}

impl YearWindow {
    pub const SPAN: i32 = 12;

    /// The page containing `year` (clamped to the floor).
    pub fn containing(year: i32) -> Self {
        let year = year.max(YEAR_FLOOR);
        YearWindow {
            first: YEAR_FLOOR + (year - YEAR_FLOOR) / Self::SPAN * Self::SPAN,
        }
    }

    /// Last year of the page, inclusive.
    pub fn last(&self) -> i32 {
        self.first + Self::SPAN - 1
    }

    pub fn contains(&self, year: i32) -> bool {
        self.first <= year && year <= self.last()
    }

    /// Previous page, `None` at the floor.
    pub fn prev(&self) -> Option<YearWindow> {
        (self.first - Self::SPAN >= YEAR_FLOOR).then(|| YearWindow {
            first: self.first - Self::SPAN,
        })
    }

    pub fn next(&self) -> YearWindow {
        YearWindow {
            first: self.first + Self::SPAN,
        }
    }

    /// Header title, e.g. `"1900 - 1911"`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.first, self.last())
    }
}

// ---------------------------------------------------------------------------
// YearCell / YearGrid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    /// Today's year.
    pub current: bool,
    pub endpoint: bool,
    pub in_range: bool,
}

/// One 12-year page, laid out 3 columns x 4 rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGrid {
    pub window: YearWindow,
    pub cells: [YearCell; 12],
}

impl YearGrid {
    pub const COLUMNS: usize = 3;
    pub const ROWS: usize = 4;

    pub fn build(window: YearWindow, selection: &Selection, today: DateValue) -> Self {
        let cells = std::array::from_fn(|i| cell(window.first + i as i32, selection, today));
        YearGrid { window, cells }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&YearCell> {
        if col >= Self::COLUMNS {
            return None;
        }
        self.cells.get(row * Self::COLUMNS + col)
    }
}

fn cell(year: i32, selection: &Selection, today: DateValue) -> YearCell {
    let (endpoint, in_range) = match selection {
        Selection::Single(sel) => (sel.is_some_and(|d| d.year() == year), false),
        Selection::Range(range) => {
            let range = range.ordered();
            let endpoint = range.start.is_some_and(|d| d.year() == year)
                || range.end.is_some_and(|d| d.year() == year);
            let in_range = match (range.start, range.end) {
                (Some(start), Some(end)) => start.year() < year && year < end.year(),
                _ => false,
            };
            (endpoint, in_range)
        }
    };
    YearCell {
        year,
        current: today.year() == year,
        endpoint,
        in_range,
    }
}

// ---------------------------------------------------------------------------
// Keyboard stepping
// ---------------------------------------------------------------------------

/// Outcome of an arrow-key step in the year grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStep {
    Within { year: i32 },
    /// The step left the current 12-year page.
    Across { window: YearWindow, year: i32 },
    /// The step would cross the year floor.
    Blocked,
}

/// Step the focused year by `delta` (±1 horizontal, ±3 vertical),
/// paging into the adjacent window on overflow.
pub fn step_year(window: YearWindow, year: i32, delta: i32) -> YearStep {
    let next = year + delta;
    if next < YEAR_FLOOR {
        return YearStep::Blocked;
    }
    if window.contains(next) {
        YearStep::Within { year: next }
    } else {
        YearStep::Across {
            window: YearWindow::containing(next),
            year: next,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
