//! PickerPilot: drive a date picker headlessly.
//!
//! The pilot owns a [`DatePicker`], feeds it synthetic input events, and
//! collects everything the picker emits so tests can assert on the full
//! event log without a terminal.

use crate::date::DateValue;
use crate::event::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent};
use crate::geometry::Region;
use crate::picker::{ConfigError, DatePicker, DatePickerConfig, PickerEvent};
use crate::testing::snapshot;
use crate::theme::Theme;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// PickerPilot
// ---------------------------------------------------------------------------

/// Headless driver for a [`DatePicker`].
///
/// # Examples
///
/// ```ignore
/// let mut pilot = PickerPilot::new(DatePickerConfig::default())?;
/// pilot.type_text("18032022");
/// assert!(pilot.events().iter().any(|e| matches!(e, PickerEvent::Changed(Some(_)))));
/// ```
pub struct PickerPilot {
    picker: DatePicker,
    theme: Theme,
    events: Vec<PickerEvent>,
}

impl PickerPilot {
    /// Build a pilot around a fresh picker.
    ///
    /// The picker keeps its default frame: a two-row region at the
    /// origin inside an 80x24 canvas. Use [`place`](Self::place) to
    /// change either.
    pub fn new(config: DatePickerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            picker: DatePicker::new(config)?,
            theme: Theme::default(),
            events: Vec::new(),
        })
    }

    /// Same as [`new`](Self::new) with a pinned idea of "today", so
    /// tests do not depend on the wall clock.
    pub fn with_today(config: DatePickerConfig, today: DateValue) -> Result<Self, ConfigError> {
        Ok(Self {
            picker: DatePicker::with_today(config, today)?,
            theme: Theme::default(),
            events: Vec::new(),
        })
    }

    /// Move the picker and constrain its popup.
    pub fn place(mut self, region: Region, bounds: Region) -> Self {
        self.picker.set_region(region);
        self.picker.set_bounds(bounds);
        self
    }

    /// Render with a custom theme instead of the default sheet.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    // -- input simulation ---------------------------------------------------

    /// Feed one raw event and record whatever the picker emits.
    pub fn process(&mut self, event: InputEvent) {
        let emitted = self.picker.handle_input(event);
        self.events.extend(emitted);
    }

    /// Press a key without modifiers.
    pub fn press_key(&mut self, code: Key) {
        self.process(InputEvent::Key(KeyEvent::plain(code)));
    }

    /// Press a key with modifiers.
    pub fn press_key_with(&mut self, code: Key, modifiers: Modifiers) {
        self.process(InputEvent::Key(KeyEvent::new(code, modifiers)));
    }

    /// Type a string one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Left-click at an absolute position.
    pub fn click(&mut self, x: u16, y: u16) {
        self.process(InputEvent::Mouse(MouseEvent {
            kind: MouseAction::Down(MouseBtn::Left),
            x,
            y,
            modifiers: Modifiers::NONE,
        }));
    }

    /// Paste a string into the picker.
    pub fn paste(&mut self, text: &str) {
        self.process(InputEvent::Paste(text.to_owned()));
    }

    /// Take terminal focus away from the picker.
    pub fn blur(&mut self) {
        self.process(InputEvent::FocusLost);
    }

    /// Resize the host canvas.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.process(InputEvent::Resize { width, height });
    }

    // -- events -------------------------------------------------------------

    /// Everything emitted since construction (or the last take).
    pub fn events(&self) -> &[PickerEvent] {
        &self.events
    }

    /// Drain the event log, leaving it empty.
    pub fn take_events(&mut self) -> Vec<PickerEvent> {
        std::mem::take(&mut self.events)
    }

    // -- picker access ------------------------------------------------------

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut DatePicker {
        &mut self.picker
    }

    // -- rendering ----------------------------------------------------------

    /// Render the picker into its canvas and return the plain text.
    pub fn render_to_text(&self) -> String {
        let bounds = self.picker.bounds();
        let strips = self.picker.render(self.picker.region(), &self.theme);
        snapshot::strips_to_string(&strips, bounds.width, bounds.height)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
