//! Selection state machine behind the picker widget.
//!
//! Owns everything the text field and the calendar popup have to agree
//! on: the selection, the displayed month, which grid is showing, the
//! keyboard focus cell, and whether typed text validated. The widget
//! layer translates keys and clicks into the operations here and
//! forwards the returned [`PickerEvent`]s to the host.

use crate::calendar::{
    self, DayStep, DisplayCursor, MonthStep, Selection, SelectionMode, YearStep,
};
use crate::calendar::{DayGrid, MonthGrid, YearGrid, YearWindow};
use crate::date::{DateError, DateFormat, DateRange, DateValue};
use crate::picker::events::{CommittedValue, PickerEvent};

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Which grid the popup is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Day,
    Month,
    Year,
}

/// A focus movement inside the active grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Left,
    Right,
    Up,
    Down,
}

// ---------------------------------------------------------------------------
// SelectionController
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SelectionController {
    mode: SelectionMode,
    format: DateFormat,
    min: Option<DateValue>,
    max: Option<DateValue>,
    today: DateValue,
    initial_display: DisplayCursor,
    open: bool,
    view: View,
    display: DisplayCursor,
    selection: Selection,
    input_text: String,
    invalid: bool,
    focus_day: u32,
    /// 0 = January.
    focus_month: u32,
    focus_year: i32,
}

impl SelectionController {
    pub fn new(
        mode: SelectionMode,
        format: DateFormat,
        initial: Option<Selection>,
        display_date: Option<DateValue>,
        min: Option<DateValue>,
        max: Option<DateValue>,
        today: DateValue,
    ) -> Self {
        let selection = initial.unwrap_or_else(|| Selection::empty(mode));
        let initial_display =
            DisplayCursor::from_date(selection.anchor().or(display_date).unwrap_or(today));
        let mut controller = Self {
            mode,
            format,
            min,
            max,
            today,
            initial_display,
            open: false,
            view: View::Day,
            display: initial_display,
            selection,
            input_text: String::new(),
            invalid: false,
            focus_day: 1,
            focus_month: 0,
            focus_year: initial_display.year,
        };
        controller.input_text = controller.selection_text();
        controller.resync_calendar();
        controller
    }

    // -- accessors ----------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn display(&self) -> DisplayCursor {
        self.display
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn today(&self) -> DateValue {
        self.today
    }

    pub fn focused_day(&self) -> u32 {
        self.focus_day
    }

    /// 0 = January.
    pub fn focused_month(&self) -> u32 {
        self.focus_month
    }

    pub fn focused_year(&self) -> i32 {
        self.focus_year
    }

    /// The fully committed value, if any. Transient range starts do not
    /// count.
    pub fn committed_value(&self) -> Option<CommittedValue> {
        match self.selection {
            Selection::Single(Some(date)) => Some(CommittedValue::Single(date)),
            Selection::Range(DateRange {
                start: Some(start),
                end: Some(end),
            }) => Some(CommittedValue::Range { start, end }),
            _ => None,
        }
    }

    /// Header title for the current view: month name and year, the year
    /// alone, or the 12-year window.
    pub fn title(&self) -> String {
        match self.view {
            View::Day => self.display.title(),
            View::Month => self.display.year.to_string(),
            View::Year => YearWindow::containing(self.display.year).title(),
        }
    }

    /// Whether the header's previous arrow can go anywhere. False once
    /// the view has hit the year floor.
    pub fn prev_enabled(&self) -> bool {
        match self.view {
            View::Day => self.display.prev_month().is_some(),
            View::Month => self.display.prev_year().is_some(),
            View::Year => YearWindow::containing(self.display.year).prev().is_some(),
        }
    }

    pub fn day_grid(&self) -> DayGrid {
        DayGrid::build(self.display, &self.selection, self.today, self.min, self.max)
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(self.display.year, &self.selection, self.today)
    }

    pub fn year_grid(&self) -> YearGrid {
        YearGrid::build(
            YearWindow::containing(self.display.year),
            &self.selection,
            self.today,
        )
    }

    // -- open / close -------------------------------------------------------

    pub fn toggle_open(&mut self) -> Vec<PickerEvent> {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn open(&mut self) -> Vec<PickerEvent> {
        if self.open {
            return Vec::new();
        }
        self.open = true;
        vec![PickerEvent::Opened]
    }

    /// Close the popup and snap the calendar back to the selection (or
    /// the initial display when nothing is selected). The view is kept.
    pub fn close(&mut self) -> Vec<PickerEvent> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.resync_calendar();
        vec![PickerEvent::Closed]
    }

    // -- header -------------------------------------------------------------

    /// Clicking the title widens the view: days to months, months to
    /// years. From the year grid it narrows back to months.
    pub fn title_click(&mut self) {
        self.view = match self.view {
            View::Day => {
                self.focus_month = self.display.month - 1;
                View::Month
            }
            View::Month => {
                self.focus_year = self.display.year;
                View::Year
            }
            View::Year => {
                self.focus_month = self.display.month - 1;
                View::Month
            }
        };
    }

    /// Page backwards: one month, one year, or one 12-year window.
    /// Inert at the year floor.
    pub fn header_prev(&mut self) {
        match self.view {
            View::Day => {
                if let Some(display) = self.display.prev_month() {
                    self.display = display;
                    self.focus_day = self.focus_day.min(self.display.days());
                }
            }
            View::Month => {
                if let Some(display) = self.display.prev_year() {
                    self.display = display;
                }
            }
            View::Year => {
                let window = YearWindow::containing(self.display.year);
                if window.prev().is_some() {
                    self.display =
                        DisplayCursor::new(self.display.year - YearWindow::SPAN, self.display.month);
                    self.focus_year -= YearWindow::SPAN;
                }
            }
        }
    }

    /// Page forwards: one month, one year, or one 12-year window.
    pub fn header_next(&mut self) {
        match self.view {
            View::Day => {
                self.display = self.display.next_month();
                self.focus_day = self.focus_day.min(self.display.days());
            }
            View::Month => {
                self.display = self.display.next_year();
            }
            View::Year => {
                self.display =
                    DisplayCursor::new(self.display.year + YearWindow::SPAN, self.display.month);
                self.focus_year += YearWindow::SPAN;
            }
        }
    }

    // -- keyboard focus -----------------------------------------------------

    /// Move the focused cell, paging the display when the move crosses
    /// a month, year, or window edge. Inert at the year floor.
    pub fn step_focus(&mut self, direction: StepDirection) {
        match self.view {
            View::Day => {
                let delta: i64 = match direction {
                    StepDirection::Left => -1,
                    StepDirection::Right => 1,
                    StepDirection::Up => -7,
                    StepDirection::Down => 7,
                };
                match calendar::step_day(self.display, self.focus_day, delta) {
                    DayStep::Within { day } => self.focus_day = day,
                    DayStep::Across { display, day } => {
                        self.display = display;
                        self.focus_day = day;
                    }
                    DayStep::Blocked => {}
                }
            }
            View::Month => {
                match calendar::step_month(
                    self.display.year,
                    self.focus_month,
                    grid_delta(direction),
                ) {
                    MonthStep::Within { index } => self.focus_month = index,
                    MonthStep::Across { year, index } => {
                        self.display = DisplayCursor::new(year, self.display.month);
                        self.focus_month = index;
                    }
                    MonthStep::Blocked => {}
                }
            }
            View::Year => {
                let window = YearWindow::containing(self.display.year);
                match calendar::step_year(window, self.focus_year, grid_delta(direction)) {
                    YearStep::Within { year } => self.focus_year = year,
                    YearStep::Across { year, .. } => {
                        self.display = DisplayCursor::new(year, self.display.month);
                        self.focus_year = year;
                    }
                    YearStep::Blocked => {}
                }
            }
        }
    }

    // -- committing ---------------------------------------------------------

    /// Commit a day. In single mode this closes the popup; in range
    /// mode the first commit holds the start and stays open, the second
    /// completes the range (ordered) and closes, and a commit over an
    /// already complete range starts over. Out-of-bounds dates are
    /// inert.
    pub fn commit_day(&mut self, date: DateValue) -> Vec<PickerEvent> {
        if self.out_of_bounds(date) {
            return Vec::new();
        }
        let before = self.committed_value();
        self.display = DisplayCursor::from_date(date);
        self.focus_day = date.day();
        self.focus_month = date.month() - 1;
        self.focus_year = date.year();

        match self.mode {
            SelectionMode::Single => {
                self.selection = Selection::Single(Some(date));
                self.finish_commit(before)
            }
            SelectionMode::Range => match self.selection {
                Selection::Range(DateRange {
                    start: Some(start),
                    end: None,
                }) => {
                    self.selection = Selection::Range(DateRange::new(start, date));
                    self.finish_commit(before)
                }
                _ => {
                    // A third click restarts the range silently; the next
                    // `Changed` fires when the new pair completes.
                    self.selection = Selection::Range(DateRange::starting(date));
                    self.input_text = self.selection_text();
                    self.invalid = false;
                    Vec::new()
                }
            },
        }
    }

    /// Commit a month cell (0 = January): narrow back to the day grid.
    pub fn commit_month(&mut self, index: u32) {
        self.display = calendar::commit_month(self.display.year, index);
        self.focus_month = index;
        self.focus_day = self.focus_day.min(self.display.days());
        self.view = View::Day;
    }

    /// Commit a year cell: narrow back to the month grid.
    pub fn commit_year(&mut self, year: i32) {
        self.display = DisplayCursor::new(year, self.display.month);
        self.focus_year = year;
        self.focus_month = self.display.month - 1;
        self.view = View::Month;
    }

    /// Commit whatever cell holds keyboard focus.
    pub fn commit_focused(&mut self) -> Vec<PickerEvent> {
        match self.view {
            View::Day => match self.display.date(self.focus_day) {
                Some(date) => self.commit_day(date),
                None => Vec::new(),
            },
            View::Month => {
                self.commit_month(self.focus_month);
                Vec::new()
            }
            View::Year => {
                self.commit_year(self.focus_year);
                Vec::new()
            }
        }
    }

    fn finish_commit(&mut self, before: Option<CommittedValue>) -> Vec<PickerEvent> {
        self.input_text = self.selection_text();
        self.invalid = false;
        let mut events = self.close();
        let after = self.committed_value();
        if after != before {
            events.push(PickerEvent::Changed(after));
        }
        events
    }

    // -- text entry ---------------------------------------------------------

    /// Record a text edit and commit any value it already parses to.
    ///
    /// Text equal to the placeholder runs the full [`clear`] transition.
    /// Bounds errors and half-entered ranges are left for [`blur`] to
    /// flag; live editing only ever commits fully valid values. A
    /// complete but inverted range is committed ordered and the stored
    /// text is rewritten to match.
    ///
    /// [`blur`]: SelectionController::blur
    /// [`clear`]: SelectionController::clear
    pub fn input_edited(&mut self, text: &str) -> Vec<PickerEvent> {
        self.input_text = text.to_owned();
        if text == self.placeholder_text() {
            return self.clear();
        }
        let before = self.committed_value();

        match self.mode {
            SelectionMode::Single => {
                if let Ok(date) = self.format.parse(text) {
                    if !self.out_of_bounds(date) {
                        self.selection = Selection::Single(Some(date));
                        self.invalid = false;
                        self.resync_calendar();
                        let after = self.committed_value();
                        if after != before {
                            return vec![PickerEvent::Changed(after)];
                        }
                    }
                }
                Vec::new()
            }
            SelectionMode::Range => self.range_edited(before),
        }
    }

    fn range_edited(&mut self, before: Option<CommittedValue>) -> Vec<PickerEvent> {
        let Some((first, second)) = self.input_text.split_once(" - ") else {
            return Vec::new();
        };
        let start = self
            .format
            .parse(first)
            .ok()
            .filter(|date| !self.out_of_bounds(*date));

        if second == self.format.placeholder() {
            if let Some(start) = start {
                self.selection = Selection::Range(DateRange::starting(start));
                self.resync_calendar();
            }
            return Vec::new();
        }

        let end = self
            .format
            .parse(second)
            .ok()
            .filter(|date| !self.out_of_bounds(*date));
        if let (Some(a), Some(b)) = (start, end) {
            self.selection = Selection::Range(DateRange::new(a, b));
            self.invalid = false;
            self.input_text = self.selection_text();
            self.resync_calendar();
            let after = self.committed_value();
            if after != before {
                return vec![PickerEvent::Changed(after)];
            }
        }
        Vec::new()
    }

    /// Validate the text on blur. Placeholder text is a valid empty
    /// value; anything else must parse completely and in bounds, or the
    /// picker goes invalid and drops whatever was committed. Failure
    /// announces `Invalid` alone.
    pub fn blur(&mut self) -> Vec<PickerEvent> {
        if self.input_text == self.placeholder_text() {
            self.selection = Selection::empty(self.mode);
            self.invalid = false;
            return Vec::new();
        }

        match self.parse_committed() {
            Ok(selection) => {
                let before = self.committed_value();
                self.selection = selection;
                self.invalid = false;
                self.input_text = self.selection_text();
                self.resync_calendar();
                let after = self.committed_value();
                if after != before {
                    vec![PickerEvent::Changed(after)]
                } else {
                    Vec::new()
                }
            }
            Err(_) => {
                // The typed text stays visible; the value does not.
                self.selection = Selection::empty(self.mode);
                self.invalid = true;
                self.resync_calendar();
                vec![PickerEvent::Invalid]
            }
        }
    }

    /// Empty the picker from the clear control. Resets the calendar to
    /// its initial display and the day view; open state is untouched.
    pub fn clear(&mut self) -> Vec<PickerEvent> {
        let before = self.committed_value();
        let untouched = self.selection.is_empty()
            && !self.invalid
            && self.input_text == self.placeholder_text();

        self.selection = Selection::empty(self.mode);
        self.input_text = self.placeholder_text();
        self.invalid = false;
        self.view = View::Day;
        self.resync_calendar();

        if untouched {
            return Vec::new();
        }
        let mut events = vec![PickerEvent::Cleared];
        if before.is_some() {
            events.push(PickerEvent::Changed(None));
        }
        events
    }

    // -- internals ----------------------------------------------------------

    fn selection_text(&self) -> String {
        match self.selection {
            Selection::Single(Some(date)) => self.format.format(date),
            Selection::Single(None) => self.format.placeholder().to_owned(),
            Selection::Range(range) => match (range.start, range.end) {
                (Some(start), Some(end)) => {
                    format!("{} - {}", self.format.format(start), self.format.format(end))
                }
                (Some(start), None) => {
                    format!("{} - {}", self.format.format(start), self.format.placeholder())
                }
                _ => self.format.range_placeholder(),
            },
        }
    }

    fn placeholder_text(&self) -> String {
        match self.mode {
            SelectionMode::Single => self.format.placeholder().to_owned(),
            SelectionMode::Range => self.format.range_placeholder(),
        }
    }

    fn parse_committed(&self) -> Result<Selection, DateError> {
        match self.mode {
            SelectionMode::Single => {
                let date = self.format.parse(&self.input_text)?;
                self.check_bounds(date)?;
                Ok(Selection::Single(Some(date)))
            }
            SelectionMode::Range => {
                let (first, second) =
                    self.input_text
                        .split_once(" - ")
                        .ok_or_else(|| DateError::Malformed {
                            text: self.input_text.clone(),
                            expected: format!("{0} - {0}", self.format.pattern()),
                        })?;
                let placeholder = self.format.placeholder();
                if first == placeholder || second == placeholder {
                    return Err(DateError::IncompleteRange);
                }
                let start = self.format.parse(first)?;
                self.check_bounds(start)?;
                let end = self.format.parse(second)?;
                self.check_bounds(end)?;
                Ok(Selection::Range(DateRange::new(start, end)))
            }
        }
    }

    fn out_of_bounds(&self, date: DateValue) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }

    fn check_bounds(&self, date: DateValue) -> Result<(), DateError> {
        if self.out_of_bounds(date) {
            Err(DateError::OutOfBounds { date })
        } else {
            Ok(())
        }
    }

    /// Where the calendar focuses when nothing directs it otherwise.
    fn anchor_focus_date(&self) -> DateValue {
        self.selection.anchor().unwrap_or_else(|| {
            let display = self.initial_display;
            if self.today.year() == display.year && self.today.month() == display.month {
                self.today
            } else {
                display.first_day()
            }
        })
    }

    fn resync_calendar(&mut self) {
        let date = self.anchor_focus_date();
        self.display = DisplayCursor::from_date(date);
        self.focus_day = date.day();
        self.focus_month = date.month() - 1;
        self.focus_year = date.year();
    }
}

fn grid_delta(direction: StepDirection) -> i32 {
    match direction {
        StepDirection::Left => -1,
        StepDirection::Right => 1,
        StepDirection::Up => -3,
        StepDirection::Down => 3,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
