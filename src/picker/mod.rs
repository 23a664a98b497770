//! The date picker: a masked text field with toggle and clear controls
//! and a calendar popup holding day, month, and year grids.
//!
//! [`DatePicker`] wires a [`DateInput`] and a [`SelectionController`]
//! together and turns raw [`InputEvent`]s into selection changes. Hosts
//! construct it from a [`DatePickerConfig`], feed events to
//! [`handle_input`], and draw the strips from [`Widget::render`].
//!
//! [`handle_input`]: DatePicker::handle_input

pub mod config;
pub mod controller;
pub mod events;

pub use config::{ConfigError, DatePickerConfig};
pub use controller::{SelectionController, StepDirection, View};
pub use events::{CommittedValue, PickerEvent};

use crate::calendar::{MonthGrid, SelectionMode, DAY_LABELS};
use crate::date::{parse_iso, DateValue};
use crate::event::{InputEvent, Key, KeyEvent, MouseAction, MouseBtn};
use crate::geometry::{Region, Size};
use crate::overlay::{place_popup, CalendarPlacement};
use crate::render::{CellStyle, Strip};
use crate::theme::Theme;
use crate::widget::Widget;
use crate::widgets::DateInput;

const PANEL_WIDTH: i32 = 21;
const DAY_PANEL_HEIGHT: i32 = 8;
const CELL_PANEL_HEIGHT: i32 = 5;
const BUTTON_WIDTH: i32 = 3;
/// Two buttons, each preceded by a one-cell gap.
const CONTROLS_WIDTH: i32 = 2 * (BUTTON_WIDTH + 1);
const TOGGLE_LABEL: &str = "[#]";
const CLEAR_LABEL: &str = "[x]";

// ---------------------------------------------------------------------------
// FocusZone / layout
// ---------------------------------------------------------------------------

/// Which part of the picker owns keyboard focus. While the popup is
/// open, Tab is trapped in the `Grid`/`Prev`/`Title`/`Next` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusZone {
    Input,
    Toggle,
    Clear,
    Grid,
    Prev,
    Title,
    Next,
}

/// Where each picker part lands for a given widget region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLayout {
    pub input: Region,
    pub toggle: Region,
    pub clear: Region,
    pub feedback: Region,
    pub popup: Option<PopupLayout>,
}

/// The open popup's regions, in host coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupLayout {
    pub panel: Region,
    pub prev: Region,
    pub title: Region,
    pub next: Region,
    /// The cell area: below the weekday row in the day view, directly
    /// below the header otherwise.
    pub grid: Region,
}

// ---------------------------------------------------------------------------
// DatePicker
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct DatePicker {
    controller: SelectionController,
    input: DateInput,
    placement: CalendarPlacement,
    flip: bool,
    disabled: bool,
    invalid_feedback: String,
    clear_button_class: String,
    focus: FocusZone,
    /// Where the widget was last placed; clicks are hit-tested here.
    region: Region,
    /// The host area the popup may occupy. Tracked from resize events.
    bounds: Region,
}

impl DatePicker {
    pub fn new(config: DatePickerConfig) -> Result<Self, ConfigError> {
        Self::with_today(config, DateValue::today())
    }

    /// Like [`new`] with an injected notion of today, so tests are
    /// deterministic.
    ///
    /// [`new`]: DatePicker::new
    pub fn with_today(config: DatePickerConfig, today: DateValue) -> Result<Self, ConfigError> {
        let min = parse_bound("min", config.min_date.as_deref())?;
        let max = parse_bound("max", config.max_date.as_deref())?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min, max });
            }
        }
        if let Some(initial) = config.initial_value {
            if initial.mode() != config.mode {
                return Err(ConfigError::ModeMismatch);
            }
        }

        let controller = SelectionController::new(
            config.mode,
            config.format,
            config.initial_value,
            config.display_date,
            min,
            max,
            today,
        );
        let mut input = DateInput::new(config.format, config.mode == SelectionMode::Range);
        if let Some(placeholder) = config.placeholder {
            input = input.with_display_placeholder(placeholder);
        }
        input.set_text(controller.input_text());
        input.set_disabled(config.disabled);

        Ok(Self {
            controller,
            input,
            placement: config.placement,
            flip: config.flip,
            disabled: config.disabled,
            invalid_feedback: config.invalid_feedback,
            clear_button_class: config.clear_button_class,
            focus: FocusZone::Input,
            region: Region::new(0, 0, 40, 2),
            bounds: Region::new(0, 0, 80, 24),
        })
    }

    // -- accessors ----------------------------------------------------------

    pub fn value(&self) -> Option<CommittedValue> {
        self.controller.committed_value()
    }

    pub fn text(&self) -> String {
        self.input.text()
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn is_invalid(&self) -> bool {
        self.controller.is_invalid()
    }

    pub fn focus_zone(&self) -> FocusZone {
        self.focus
    }

    pub fn view(&self) -> View {
        self.controller.view()
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn bounds(&self) -> Region {
        self.bounds
    }

    /// Place the widget for hit testing. Hosts call this whenever they
    /// move the picker.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Constrain popup placement. Also kept current by `Resize` events.
    pub fn set_bounds(&mut self, bounds: Region) {
        self.bounds = bounds;
    }

    // -- layout -------------------------------------------------------------

    /// Compute regions for every part. The input row is `region`'s first
    /// row; the popup is anchored to the input field and placed within
    /// the widget's bounds, so it may extend outside `region`.
    pub fn layout(&self, region: Region) -> PickerLayout {
        let row = region.row(0);
        let input_width = (row.width - CONTROLS_WIDTH).max(0);
        let input = Region::new(row.x, row.y, input_width, 1);
        let toggle =
            Region::new(row.x + input_width + 1, row.y, BUTTON_WIDTH, 1).intersection(row);
        let clear = Region::new(
            row.x + input_width + 1 + BUTTON_WIDTH + 1,
            row.y,
            BUTTON_WIDTH,
            1,
        )
        .intersection(row);
        let feedback = region.row(1);

        let popup = self.controller.is_open().then(|| {
            let panel = place_popup(input, self.panel_size(), self.placement, self.flip, self.bounds);
            let header_rows = match self.controller.view() {
                View::Day => 2,
                View::Month | View::Year => 1,
            };
            PopupLayout {
                panel,
                prev: Region::new(panel.x, panel.y, 1, 1),
                title: Region::new(panel.x + 2, panel.y, (panel.width - 4).max(0), 1),
                next: Region::new(panel.right() - 1, panel.y, 1, 1),
                grid: Region::new(
                    panel.x,
                    panel.y + header_rows,
                    panel.width,
                    (panel.height - header_rows).max(0),
                ),
            }
        });

        PickerLayout {
            input,
            toggle,
            clear,
            feedback,
            popup,
        }
    }

    fn panel_size(&self) -> Size {
        match self.controller.view() {
            View::Day => Size::new(PANEL_WIDTH, DAY_PANEL_HEIGHT),
            View::Month | View::Year => Size::new(PANEL_WIDTH, CELL_PANEL_HEIGHT),
        }
    }

    // -- event handling -----------------------------------------------------

    /// Dispatch a terminal event. Disabled pickers only track resizes.
    pub fn handle_input(&mut self, event: InputEvent) -> Vec<PickerEvent> {
        if let InputEvent::Resize { width, height } = event {
            self.bounds = Region::new(0, 0, width as i32, height as i32);
            return Vec::new();
        }
        if self.disabled {
            return Vec::new();
        }
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => match mouse.kind {
                MouseAction::Down(MouseBtn::Left) => self.handle_click(mouse.x, mouse.y),
                _ => Vec::new(),
            },
            InputEvent::FocusLost => self.handle_blur(),
            InputEvent::FocusGained => Vec::new(),
            InputEvent::Paste(text) => self.handle_paste(&text),
            InputEvent::Resize { .. } => Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<PickerEvent> {
        if self.disabled {
            return Vec::new();
        }
        match key.code {
            Key::Tab => return self.focus_next(),
            Key::BackTab => return self.focus_prev(),
            Key::Escape => return self.escape(),
            _ => {}
        }
        match self.focus {
            FocusZone::Input => self.input_key(key.code),
            FocusZone::Toggle => match key.code {
                Key::Enter | Key::Char(' ') => self.toggle_popup(),
                _ => Vec::new(),
            },
            FocusZone::Clear => match key.code {
                Key::Enter | Key::Char(' ') => self.clear(),
                _ => Vec::new(),
            },
            FocusZone::Grid => self.grid_key(key.code),
            FocusZone::Prev => match key.code {
                Key::Enter | Key::Char(' ') => {
                    self.controller.header_prev();
                    // Landing on the floor disables the arrow under us.
                    if !self.controller.prev_enabled() {
                        self.focus = FocusZone::Title;
                    }
                    Vec::new()
                }
                _ => Vec::new(),
            },
            FocusZone::Title => match key.code {
                Key::Enter | Key::Char(' ') => {
                    self.controller.title_click();
                    Vec::new()
                }
                _ => Vec::new(),
            },
            FocusZone::Next => match key.code {
                Key::Enter | Key::Char(' ') => {
                    self.controller.header_next();
                    Vec::new()
                }
                _ => Vec::new(),
            },
        }
    }

    /// Left click at host coordinates.
    pub fn handle_click(&mut self, x: u16, y: u16) -> Vec<PickerEvent> {
        if self.disabled {
            return Vec::new();
        }
        let layout = self.layout(self.region);
        let (x, y) = (i32::from(x), i32::from(y));

        if layout.input.contains(x, y) {
            self.set_focus(FocusZone::Input);
            return self.controller.toggle_open();
        }
        if layout.toggle.contains(x, y) {
            return self.toggle_popup();
        }
        if layout.clear.contains(x, y) {
            self.set_focus(FocusZone::Clear);
            return self.clear();
        }
        if let Some(popup) = layout.popup {
            if popup.panel.contains(x, y) {
                return self.popup_click(&popup, x, y);
            }
        }

        // Outside everything: the field loses focus and the popup goes.
        let mut events = Vec::new();
        if self.focus == FocusZone::Input {
            events.extend(self.blur_input());
        }
        if self.controller.is_open() {
            events.extend(self.controller.close());
            self.set_focus(FocusZone::Toggle);
        }
        self.input.set_focused(false);
        events
    }

    /// The terminal lost focus: validate pending text and close.
    pub fn handle_blur(&mut self) -> Vec<PickerEvent> {
        let mut events = self.blur_input();
        events.extend(self.controller.close());
        self.input.set_focused(false);
        events
    }

    fn handle_paste(&mut self, text: &str) -> Vec<PickerEvent> {
        if self.focus != FocusZone::Input {
            return Vec::new();
        }
        self.input.set_focused(true);
        for ch in text.chars() {
            self.input.type_char(ch);
        }
        self.after_edit()
    }

    fn input_key(&mut self, code: Key) -> Vec<PickerEvent> {
        self.input.set_focused(true);
        match code {
            Key::Char(ch) => {
                self.input.type_char(ch);
                self.after_edit()
            }
            Key::Backspace => {
                self.input.backspace();
                self.after_edit()
            }
            Key::Delete => {
                self.input.delete();
                self.after_edit()
            }
            Key::Left => {
                self.input.move_left();
                Vec::new()
            }
            Key::Right => {
                self.input.move_right();
                Vec::new()
            }
            Key::Home => {
                self.input.move_home();
                Vec::new()
            }
            Key::End => {
                self.input.move_end();
                Vec::new()
            }
            Key::Enter => self.blur_input(),
            _ => Vec::new(),
        }
    }

    fn grid_key(&mut self, code: Key) -> Vec<PickerEvent> {
        match code {
            Key::Left => {
                self.controller.step_focus(StepDirection::Left);
                Vec::new()
            }
            Key::Right => {
                self.controller.step_focus(StepDirection::Right);
                Vec::new()
            }
            Key::Up => {
                self.controller.step_focus(StepDirection::Up);
                Vec::new()
            }
            Key::Down => {
                self.controller.step_focus(StepDirection::Down);
                Vec::new()
            }
            Key::Enter | Key::Char(' ') => {
                let events = self.controller.commit_focused();
                self.after_commit(&events);
                events
            }
            _ => Vec::new(),
        }
    }

    fn popup_click(&mut self, popup: &PopupLayout, x: i32, y: i32) -> Vec<PickerEvent> {
        if popup.prev.contains(x, y) {
            if self.controller.prev_enabled() {
                self.controller.header_prev();
            }
            return Vec::new();
        }
        if popup.next.contains(x, y) {
            self.controller.header_next();
            return Vec::new();
        }
        if popup.title.contains(x, y) {
            self.controller.title_click();
            return Vec::new();
        }
        if popup.grid.contains(x, y) {
            return self.grid_click(popup, x, y);
        }
        Vec::new()
    }

    fn grid_click(&mut self, popup: &PopupLayout, x: i32, y: i32) -> Vec<PickerEvent> {
        let row = (y - popup.grid.y) as usize;
        match self.controller.view() {
            View::Day => {
                let col = ((x - popup.grid.x) / 3) as usize;
                let grid = self.controller.day_grid();
                if let Some(cell) = grid.cell_at(row, col) {
                    let date = cell.date;
                    let events = self.controller.commit_day(date);
                    self.after_commit(&events);
                    return events;
                }
            }
            View::Month => {
                let col = ((x - popup.grid.x) / 7) as usize;
                if row < MonthGrid::ROWS && col < MonthGrid::COLUMNS {
                    self.controller.commit_month((row * MonthGrid::COLUMNS + col) as u32);
                }
            }
            View::Year => {
                let col = ((x - popup.grid.x) / 7) as usize;
                let grid = self.controller.year_grid();
                if let Some(cell) = grid.cell_at(row, col) {
                    let year = cell.year;
                    self.controller.commit_year(year);
                }
            }
        }
        Vec::new()
    }

    // -- focus --------------------------------------------------------------

    fn set_focus(&mut self, zone: FocusZone) {
        self.focus = zone;
        self.input.set_focused(zone == FocusZone::Input);
    }

    fn focus_next(&mut self) -> Vec<PickerEvent> {
        let events = if self.focus == FocusZone::Input {
            self.blur_input()
        } else {
            Vec::new()
        };
        let next = if self.controller.is_open() {
            match self.focus {
                FocusZone::Grid => {
                    if self.controller.prev_enabled() {
                        FocusZone::Prev
                    } else {
                        FocusZone::Title
                    }
                }
                FocusZone::Prev => FocusZone::Title,
                FocusZone::Title => FocusZone::Next,
                FocusZone::Next => FocusZone::Grid,
                FocusZone::Input | FocusZone::Toggle | FocusZone::Clear => FocusZone::Grid,
            }
        } else {
            match self.focus {
                FocusZone::Input => FocusZone::Toggle,
                FocusZone::Toggle => FocusZone::Clear,
                _ => FocusZone::Input,
            }
        };
        self.set_focus(next);
        events
    }

    fn focus_prev(&mut self) -> Vec<PickerEvent> {
        let events = if self.focus == FocusZone::Input {
            self.blur_input()
        } else {
            Vec::new()
        };
        let prev = if self.controller.is_open() {
            match self.focus {
                FocusZone::Grid => FocusZone::Next,
                FocusZone::Next => FocusZone::Title,
                FocusZone::Title => {
                    if self.controller.prev_enabled() {
                        FocusZone::Prev
                    } else {
                        FocusZone::Grid
                    }
                }
                FocusZone::Prev => FocusZone::Grid,
                FocusZone::Input | FocusZone::Toggle | FocusZone::Clear => FocusZone::Next,
            }
        } else {
            match self.focus {
                FocusZone::Input => FocusZone::Clear,
                FocusZone::Clear => FocusZone::Toggle,
                _ => FocusZone::Input,
            }
        };
        self.set_focus(prev);
        events
    }

    fn escape(&mut self) -> Vec<PickerEvent> {
        if !self.controller.is_open() {
            return Vec::new();
        }
        let events = self.controller.close();
        self.set_focus(FocusZone::Toggle);
        events
    }

    // -- shared transitions -------------------------------------------------

    fn toggle_popup(&mut self) -> Vec<PickerEvent> {
        let events = self.controller.toggle_open();
        if self.controller.is_open() {
            self.set_focus(FocusZone::Grid);
        } else {
            self.set_focus(FocusZone::Toggle);
        }
        events
    }

    fn clear(&mut self) -> Vec<PickerEvent> {
        let events = self.controller.clear();
        self.sync_input();
        events
    }

    fn after_edit(&mut self) -> Vec<PickerEvent> {
        let events = self.controller.input_edited(&self.input.text());
        self.sync_input();
        events
    }

    fn blur_input(&mut self) -> Vec<PickerEvent> {
        let events = self.controller.blur();
        self.sync_input();
        events
    }

    fn after_commit(&mut self, events: &[PickerEvent]) {
        if events.contains(&PickerEvent::Closed) {
            self.set_focus(FocusZone::Toggle);
        }
        self.sync_input();
    }

    /// Pull the controller's text back into the field when it rewrote
    /// it (commits, range reordering, clear).
    fn sync_input(&mut self) {
        if self.input.text() != self.controller.input_text() {
            let text = self.controller.input_text().to_owned();
            self.input.set_text(&text);
        }
        self.input.set_invalid(self.controller.is_invalid());
    }

    // -- rendering ----------------------------------------------------------

    fn button_strip(
        &self,
        region: Region,
        label: &str,
        focused: bool,
        extra: &[&str],
        theme: &Theme,
    ) -> Option<Strip> {
        if region.width <= 0 || region.height <= 0 {
            return None;
        }
        let mut classes = extra.to_vec();
        if self.disabled {
            classes.push("disabled");
        } else if focused {
            classes.push("focused");
        }
        let style = theme.resolve("button", &classes);
        let mut strip = Strip::new(region.y, region.x);
        strip.push_str(label, style.clone());
        strip.fill(region.width, style);
        Some(strip)
    }

    fn render_popup(&self, popup: &PopupLayout, theme: &Theme) -> Vec<Strip> {
        let panel = popup.panel;
        if panel.width <= 0 || panel.height <= 0 {
            return Vec::new();
        }
        let panel_style = theme.resolve("panel", &[]);
        let mut strips = vec![self.header_strip(popup, &panel_style, theme)];
        match self.controller.view() {
            View::Day => self.day_rows(popup, &panel_style, theme, &mut strips),
            View::Month => self.month_rows(popup, &panel_style, theme, &mut strips),
            View::Year => self.year_rows(popup, &panel_style, theme, &mut strips),
        }
        strips
    }

    fn header_strip(&self, popup: &PopupLayout, panel_style: &CellStyle, theme: &Theme) -> Strip {
        let panel = popup.panel;
        let base = theme.resolve("header", &[]);
        let mut prev_classes: Vec<&str> = Vec::new();
        if !self.controller.prev_enabled() {
            prev_classes.push("disabled");
        }
        if self.focus == FocusZone::Prev {
            prev_classes.push("focused");
        }
        let prev_style = theme.resolve("header", &prev_classes);
        let title_style = if self.focus == FocusZone::Title {
            theme.resolve("header", &["focused"])
        } else {
            base.clone()
        };
        let next_style = if self.focus == FocusZone::Next {
            theme.resolve("header", &["focused"])
        } else {
            base.clone()
        };

        let mut strip = Strip::new(panel.y, panel.x);
        strip.push('<', prev_style);
        strip.push(' ', base.clone());
        let width = (PANEL_WIDTH - 4) as usize;
        strip.push_str(
            &format!("{:^width$}", self.controller.title()),
            title_style,
        );
        strip.push(' ', base);
        strip.push('>', next_style);
        strip.fill(panel.width, panel_style.clone());
        strip
    }

    fn day_rows(
        &self,
        popup: &PopupLayout,
        panel_style: &CellStyle,
        theme: &Theme,
        strips: &mut Vec<Strip>,
    ) {
        let panel = popup.panel;
        if panel.y + 1 < panel.bottom() {
            let style = theme.resolve("weekday", &[]);
            let mut strip = Strip::new(panel.y + 1, panel.x);
            for label in DAY_LABELS {
                strip.push_str(&format!("{label:>2} "), style.clone());
            }
            strip.fill(panel.width, panel_style.clone());
            strips.push(strip);
        }

        let grid = self.controller.day_grid();
        let focused = (self.focus == FocusZone::Grid).then(|| self.controller.focused_day());
        for row in 0..(DAY_PANEL_HEIGHT - 2) as usize {
            let y = popup.grid.y + row as i32;
            if y >= panel.bottom() {
                break;
            }
            let mut strip = Strip::new(y, panel.x);
            for col in 0..7 {
                match grid.cell_at(row, col) {
                    Some(cell) => {
                        let mut classes: Vec<&str> = Vec::new();
                        if cell.today {
                            classes.push("today");
                        }
                        if cell.disabled {
                            classes.push("disabled");
                        }
                        if cell.selected {
                            classes.push("selected");
                        }
                        if cell.range_endpoint {
                            classes.push("endpoint");
                        }
                        if cell.in_range {
                            classes.push("in-range");
                        }
                        if focused == Some(cell.day) {
                            classes.push("focused");
                        }
                        let style = theme.resolve("day", &classes);
                        strip.push_str(&format!("{:>2} ", cell.day), style);
                    }
                    None => strip.push_str("   ", panel_style.clone()),
                }
            }
            strip.fill(panel.width, panel_style.clone());
            strips.push(strip);
        }
    }

    fn month_rows(
        &self,
        popup: &PopupLayout,
        panel_style: &CellStyle,
        theme: &Theme,
        strips: &mut Vec<Strip>,
    ) {
        let grid = self.controller.month_grid();
        let focused = (self.focus == FocusZone::Grid).then(|| self.controller.focused_month());
        for row in 0..MonthGrid::ROWS {
            let y = popup.grid.y + row as i32;
            if y >= popup.panel.bottom() {
                break;
            }
            let mut strip = Strip::new(y, popup.panel.x);
            for col in 0..MonthGrid::COLUMNS {
                if let Some(cell) = grid.cell_at(row, col) {
                    let mut classes: Vec<&str> = Vec::new();
                    if cell.current {
                        classes.push("current");
                    }
                    if cell.endpoint {
                        classes.push("endpoint");
                    }
                    if cell.in_range {
                        classes.push("in-range");
                    }
                    if focused == Some(cell.index) {
                        classes.push("focused");
                    }
                    let style = theme.resolve("month", &classes);
                    strip.push_str(&format!("{:^7}", cell.label), style);
                }
            }
            strip.fill(popup.panel.width, panel_style.clone());
            strips.push(strip);
        }
    }

    fn year_rows(
        &self,
        popup: &PopupLayout,
        panel_style: &CellStyle,
        theme: &Theme,
        strips: &mut Vec<Strip>,
    ) {
        let grid = self.controller.year_grid();
        let focused = (self.focus == FocusZone::Grid).then(|| self.controller.focused_year());
        for row in 0..MonthGrid::ROWS {
            let y = popup.grid.y + row as i32;
            if y >= popup.panel.bottom() {
                break;
            }
            let mut strip = Strip::new(y, popup.panel.x);
            for col in 0..MonthGrid::COLUMNS {
                if let Some(cell) = grid.cell_at(row, col) {
                    let mut classes: Vec<&str> = Vec::new();
                    if cell.current {
                        classes.push("current");
                    }
                    if cell.endpoint {
                        classes.push("endpoint");
                    }
                    if cell.in_range {
                        classes.push("in-range");
                    }
                    if focused == Some(cell.year) {
                        classes.push("focused");
                    }
                    let style = theme.resolve("year", &classes);
                    strip.push_str(&format!("{:^7}", cell.year), style);
                }
            }
            strip.fill(popup.panel.width, panel_style.clone());
            strips.push(strip);
        }
    }
}

impl Widget for DatePicker {
    fn widget_type(&self) -> &str {
        "datepicker"
    }

    fn can_focus(&self) -> bool {
        !self.disabled
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        if region.width <= 0 || region.height <= 0 {
            return Vec::new();
        }
        let layout = self.layout(region);
        let mut strips = self.input.render(layout.input, theme);
        strips.extend(self.button_strip(
            layout.toggle,
            TOGGLE_LABEL,
            self.focus == FocusZone::Toggle,
            &[],
            theme,
        ));
        strips.extend(self.button_strip(
            layout.clear,
            CLEAR_LABEL,
            self.focus == FocusZone::Clear,
            &[self.clear_button_class.as_str()],
            theme,
        ));

        if self.controller.is_invalid() && region.height >= 2 {
            let style = theme.resolve("feedback", &["invalid"]);
            let mut strip = Strip::new(layout.feedback.y, layout.feedback.x);
            strip.push_str(&self.invalid_feedback, style.clone());
            strip.fill(layout.feedback.width, style);
            strips.push(strip);
        }

        if let Some(popup) = &layout.popup {
            strips.extend(self.render_popup(popup, theme));
        }
        strips
    }
}

fn parse_bound(which: &'static str, text: Option<&str>) -> Result<Option<DateValue>, ConfigError> {
    match text {
        None => Ok(None),
        Some(value) => parse_iso(value)
            .map(Some)
            .map_err(|source| ConfigError::InvalidBound {
                which,
                text: value.to_owned(),
                source,
            }),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
