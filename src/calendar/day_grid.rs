//! The day grid: population, per-cell flags, keyboard stepping.

use crate::date::{DateValue, YEAR_FLOOR};

use super::{DisplayCursor, Selection};

// ---------------------------------------------------------------------------
// DayCell
// ---------------------------------------------------------------------------

/// One day cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    pub date: DateValue,
    pub today: bool,
    /// Outside the configured min/max bounds; inert to clicks.
    pub disabled: bool,
    /// Single-mode equality with the selected date.
    pub selected: bool,
    /// Equal to a range endpoint.
    pub range_endpoint: bool,
    /// Strictly between the ordered range endpoints.
    pub in_range: bool,
}

impl DayCell {
    /// Accessible long form, e.g. `"Friday, March 18, 2022"`.
    pub fn label(&self) -> String {
        self.date.long_label()
    }

    /// Any selected-ish styling, for accessibility and theming.
    pub fn is_marked(&self) -> bool {
        self.selected || self.range_endpoint || self.in_range
    }
}

// ---------------------------------------------------------------------------
// DayGrid
// ---------------------------------------------------------------------------

/// The populated grid for one display month: up to six week rows of
/// seven slots, `None` padding before the 1st and after the last day.
/// Weeks start on Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl DayGrid {
    pub fn build(
        display: DisplayCursor,
        selection: &Selection,
        today: DateValue,
        min: Option<DateValue>,
        max: Option<DateValue>,
    ) -> Self {
        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut col = display.first_day().weekday_from_sunday() as usize;

        for day in 1..=display.days() {
            let Some(date) = display.date(day) else {
                continue;
            };
            week[col] = Some(cell(day, date, selection, today, min, max));
            col += 1;
            if col == 7 {
                weeks.push(std::mem::replace(&mut week, [None; 7]));
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        DayGrid { weeks }
    }

    /// Number of week rows.
    pub fn rows(&self) -> usize {
        self.weeks.len()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&DayCell> {
        self.weeks.get(row)?.get(col)?.as_ref()
    }

    /// Row and column of `day`, if the grid holds it.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        for (row, week) in self.weeks.iter().enumerate() {
            for (col, slot) in week.iter().enumerate() {
                if slot.is_some_and(|c| c.day == day) {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// All populated cells in date order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().filter_map(|slot| slot.as_ref())
    }
}

fn cell(
    day: u32,
    date: DateValue,
    selection: &Selection,
    today: DateValue,
    min: Option<DateValue>,
    max: Option<DateValue>,
) -> DayCell {
    let disabled = min.is_some_and(|m| date < m) || max.is_some_and(|m| date > m);
    let (selected, range_endpoint, in_range) = match selection {
        Selection::Single(sel) => (*sel == Some(date), false, false),
        Selection::Range(range) => {
            // Flags come from the ordered range, so storage order of a
            // committed pair never matters.
            let range = range.ordered();
            match (range.start, range.end) {
                (Some(start), Some(end)) => {
                    let endpoint = date == start || date == end;
                    (false, endpoint, !endpoint && start < date && date < end)
                }
                (Some(start), None) => (false, date == start, false),
                (None, Some(end)) => {
                    debug_assert!(false, "range selection with end but no start");
                    (false, date == end, false)
                }
                (None, None) => (false, false, false),
            }
        }
    };
    DayCell {
        day,
        date,
        today: date == today,
        disabled,
        selected,
        range_endpoint,
        in_range,
    }
}

// ---------------------------------------------------------------------------
// Keyboard stepping
// ---------------------------------------------------------------------------

/// Outcome of an arrow-key step in the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStep {
    /// Focus moves within the shown month.
    Within { day: u32 },
    /// Focus crosses into an adjacent month; the display follows.
    Across { display: DisplayCursor, day: u32 },
    /// The step would land before the year floor.
    Blocked,
}

/// Step the focused day by `delta` whole days (±1 horizontal, ±7
/// vertical).
pub fn step_day(display: DisplayCursor, day: u32, delta: i64) -> DayStep {
    let Some(date) = display.date(day) else {
        return DayStep::Blocked;
    };
    let Some(next) = date.offset_days(delta) else {
        return DayStep::Blocked;
    };
    if next.year() < YEAR_FLOOR {
        return DayStep::Blocked;
    }
    if next.year() == display.year && next.month() == display.month {
        DayStep::Within { day: next.day() }
    } else {
        DayStep::Across {
            display: DisplayCursor::from_date(next),
            day: next.day(),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::date::DateRange;

    fn date(y: i32, m: u32, d: u32) -> DateValue {
        DateValue::new(y, m, d).unwrap()
    }

    fn march_2022() -> DisplayCursor {
        DisplayCursor::new(2022, 3)
    }

    fn build(selection: Selection) -> DayGrid {
        DayGrid::build(march_2022(), &selection, date(2022, 3, 21), None, None)
    }

    // ── Grid shape ──────────────────────────────────────────────────────

    #[test]
    fn march_2022_shape() {
        // March 1st 2022 was a Tuesday; 31 days => 5 week rows.
        let grid = build(Selection::Single(None));
        assert_eq!(grid.rows(), 5);
        assert!(grid.weeks[0][0].is_none());
        assert!(grid.weeks[0][1].is_none());
        assert_eq!(grid.weeks[0][2].map(|c| c.day), Some(1));
        assert_eq!(grid.weeks[4][4].map(|c| c.day), Some(31));
        assert!(grid.weeks[4][5].is_none());
        assert_eq!(grid.cells().count(), 31);
    }

    #[test]
    fn six_row_month() {
        // May 2022 starts on Sunday and has 31 days => exactly 5 rows;
        // October 2022 starts on Saturday => 6 rows.
        let may = DayGrid::build(
            DisplayCursor::new(2022, 5),
            &Selection::Single(None),
            date(2022, 3, 21),
            None,
            None,
        );
        assert_eq!(may.rows(), 5);

        let october = DayGrid::build(
            DisplayCursor::new(2022, 10),
            &Selection::Single(None),
            date(2022, 3, 21),
            None,
            None,
        );
        assert_eq!(october.rows(), 6);
        assert_eq!(october.weeks[0][6].map(|c| c.day), Some(1));
    }

    #[test]
    fn position_lookup() {
        let grid = build(Selection::Single(None));
        assert_eq!(grid.position_of(1), Some((0, 2)));
        assert_eq!(grid.position_of(18), Some((2, 5)));
        assert_eq!(grid.position_of(32), None);
        assert_eq!(grid.cell_at(2, 5).map(|c| c.day), Some(18));
    }

    // ── Flags ───────────────────────────────────────────────────────────

    #[test]
    fn single_selection_marks_exactly_one_cell() {
        let grid = build(Selection::Single(Some(date(2022, 3, 18))));
        let selected: Vec<u32> = grid.cells().filter(|c| c.selected).map(|c| c.day).collect();
        assert_eq!(selected, vec![18]);
        assert!(grid.cells().all(|c| !c.range_endpoint && !c.in_range));
    }

    #[test]
    fn today_flag() {
        let grid = build(Selection::Single(None));
        let today: Vec<u32> = grid.cells().filter(|c| c.today).map(|c| c.day).collect();
        assert_eq!(today, vec![21]);
    }

    #[test]
    fn reversed_range_highlights_order_independently() {
        // Entered end-first; flags still treat 18 as start and 20 as end.
        let grid = build(Selection::Range(DateRange {
            start: Some(date(2022, 3, 20)),
            end: Some(date(2022, 3, 18)),
        }));
        let endpoints: Vec<u32> = grid
            .cells()
            .filter(|c| c.range_endpoint)
            .map(|c| c.day)
            .collect();
        let in_range: Vec<u32> = grid.cells().filter(|c| c.in_range).map(|c| c.day).collect();
        assert_eq!(endpoints, vec![18, 20]);
        assert_eq!(in_range, vec![19]);
    }

    #[test]
    fn start_only_range_marks_start() {
        let grid = build(Selection::Range(DateRange::starting(date(2022, 3, 18))));
        let endpoints: Vec<u32> = grid
            .cells()
            .filter(|c| c.range_endpoint)
            .map(|c| c.day)
            .collect();
        assert_eq!(endpoints, vec![18]);
        assert!(grid.cells().all(|c| !c.in_range));
    }

    #[test]
    fn range_spanning_months_highlights_visible_part() {
        let range = Selection::Range(DateRange::new(date(2022, 2, 25), date(2022, 3, 3)));
        let grid = build(range);
        let endpoints: Vec<u32> = grid
            .cells()
            .filter(|c| c.range_endpoint)
            .map(|c| c.day)
            .collect();
        let in_range: Vec<u32> = grid.cells().filter(|c| c.in_range).map(|c| c.day).collect();
        assert_eq!(endpoints, vec![3]);
        assert_eq!(in_range, vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "end but no start")]
    fn end_only_range_asserts() {
        build(Selection::Range(DateRange {
            start: None,
            end: Some(date(2022, 3, 18)),
        }));
    }

    #[test]
    fn min_max_disable_out_of_bounds_cells() {
        let grid = DayGrid::build(
            march_2022(),
            &Selection::Single(None),
            date(2022, 3, 21),
            Some(date(2022, 3, 15)),
            Some(date(2022, 3, 21)),
        );
        let enabled: Vec<u32> = grid
            .cells()
            .filter(|c| !c.disabled)
            .map(|c| c.day)
            .collect();
        assert_eq!(enabled, (15..=21).collect::<Vec<u32>>());
    }

    #[test]
    fn is_marked_covers_selection_styles() {
        let grid = build(Selection::Range(DateRange::new(
            date(2022, 3, 18),
            date(2022, 3, 20),
        )));
        let marked: Vec<u32> = grid
            .cells()
            .filter(|c| c.is_marked())
            .map(|c| c.day)
            .collect();
        assert_eq!(marked, vec![18, 19, 20]);
    }

    #[test]
    fn label_spoken_form() {
        let grid = build(Selection::Single(None));
        let (row, col) = grid.position_of(18).unwrap();
        let cell = grid.cell_at(row, col).unwrap();
        assert_eq!(cell.label(), "Friday, March 18, 2022");
    }

    // ── Stepping ────────────────────────────────────────────────────────

    #[test]
    fn step_within_month() {
        assert_eq!(step_day(march_2022(), 18, 1), DayStep::Within { day: 19 });
        assert_eq!(step_day(march_2022(), 18, -7), DayStep::Within { day: 11 });
    }

    #[test]
    fn step_across_month_boundary() {
        assert_eq!(
            step_day(march_2022(), 31, 1),
            DayStep::Across {
                display: DisplayCursor::new(2022, 4),
                day: 1
            }
        );
        assert_eq!(
            step_day(march_2022(), 2, -7),
            DayStep::Across {
                display: DisplayCursor::new(2022, 2),
                day: 23
            }
        );
    }

    #[test]
    fn step_across_year_boundary() {
        assert_eq!(
            step_day(DisplayCursor::new(2021, 12), 28, 7),
            DayStep::Across {
                display: DisplayCursor::new(2022, 1),
                day: 4
            }
        );
    }

    #[test]
    fn step_blocked_at_year_floor() {
        let floor = DisplayCursor::new(1900, 1);
        assert_eq!(step_day(floor, 1, -1), DayStep::Blocked);
        assert_eq!(step_day(floor, 5, -7), DayStep::Blocked);
        assert_eq!(step_day(floor, 8, -7), DayStep::Within { day: 1 });
    }
}
