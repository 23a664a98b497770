//! DateInput widget: a focusable masked date entry field.
//!
//! The field is shaped by a digit mask derived from the [`DateFormat`]
//! (`99/99/9999`, or two masks joined by `" - "` for range entry). Typed
//! digits land on mask slots; separators are literals the cursor skips.
//! Empty slots show the format placeholder (`dd/mm/yyyy`), so the text is
//! always exactly mask-shaped and the placeholder text doubles as the
//! "no value entered" state.

use crate::date::DateFormat;
use crate::geometry::Region;
use crate::render::Strip;
use crate::theme::Theme;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// DateInput
// ---------------------------------------------------------------------------

/// A masked text input for date entry.
///
/// The cursor always rests on an editable slot (a `9` position in the
/// mask). `chars` has the same length as the mask; untyped slots hold
/// their placeholder char.
///
/// # Examples
///
/// ```ignore
/// let mut input = DateInput::new(DateFormat::DayMonthYear, false);
/// for ch in "18032022".chars() {
///     input.type_char(ch);
/// }
/// assert_eq!(input.text(), "18/03/2022");
/// ```
#[derive(Debug)]
pub struct DateInput {
    mask: Vec<char>,
    placeholder: Vec<char>,
    chars: Vec<char>,
    cursor: usize,
    display_placeholder: Option<String>,
    focused: bool,
    invalid: bool,
    disabled: bool,
}

impl DateInput {
    /// Create an input for a single date, or for a `start - end` range
    /// when `range` is `true`.
    pub fn new(format: DateFormat, range: bool) -> Self {
        let (mask, placeholder) = if range {
            (format.range_mask(), format.range_placeholder())
        } else {
            (format.mask().to_owned(), format.placeholder().to_owned())
        };
        let mask: Vec<char> = mask.chars().collect();
        let placeholder: Vec<char> = placeholder.chars().collect();
        let cursor = first_slot(&mask);
        Self {
            chars: placeholder.clone(),
            mask,
            placeholder,
            cursor,
            display_placeholder: None,
            focused: false,
            invalid: false,
            disabled: false,
        }
    }

    /// Set a free-form placeholder shown instead of the mask while the
    /// field is empty and unfocused (builder pattern).
    pub fn with_display_placeholder(mut self, text: impl Into<String>) -> Self {
        self.display_placeholder = Some(text.into());
        self
    }

    /// Return the current text, always exactly mask-shaped.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Whether the field still shows its untyped placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.chars == self.placeholder
    }

    /// Return the cursor position (char index into the mask).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text wholesale. Anything that is not exactly
    /// mask-length resets the field to its placeholder. The cursor moves
    /// to the first slot either way.
    pub fn set_text(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() == self.mask.len() {
            self.chars = chars;
        } else {
            self.chars = self.placeholder.clone();
        }
        self.cursor = first_slot(&self.mask);
    }

    /// Reset the field to its placeholder.
    pub fn clear(&mut self) {
        self.chars = self.placeholder.clone();
        self.cursor = first_slot(&self.mask);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Type a character at the cursor slot. Only ASCII digits land;
    /// anything else is ignored. The cursor advances to the next slot,
    /// staying put on the last one.
    pub fn type_char(&mut self, ch: char) {
        if !ch.is_ascii_digit() {
            return;
        }
        self.chars[self.cursor] = ch;
        if let Some(next) = self.next_slot(self.cursor) {
            self.cursor = next;
        }
    }

    /// Backspace: if the cursor slot holds a typed char, restore its
    /// placeholder; otherwise step to the previous slot and restore that.
    pub fn backspace(&mut self) {
        if self.chars[self.cursor] != self.placeholder[self.cursor] {
            self.chars[self.cursor] = self.placeholder[self.cursor];
        } else if let Some(prev) = self.prev_slot(self.cursor) {
            self.cursor = prev;
            self.chars[prev] = self.placeholder[prev];
        }
    }

    /// Restore the placeholder char at the cursor without moving.
    pub fn delete(&mut self) {
        self.chars[self.cursor] = self.placeholder[self.cursor];
    }

    /// Move the cursor to the previous editable slot.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_slot(self.cursor) {
            self.cursor = prev;
        }
    }

    /// Move the cursor to the next editable slot.
    pub fn move_right(&mut self) {
        if let Some(next) = self.next_slot(self.cursor) {
            self.cursor = next;
        }
    }

    /// Move the cursor to the first editable slot.
    pub fn move_home(&mut self) {
        self.cursor = first_slot(&self.mask);
    }

    /// Move the cursor to the last editable slot.
    pub fn move_end(&mut self) {
        self.cursor = last_slot(&self.mask);
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn prev_slot(&self, from: usize) -> Option<usize> {
        self.mask[..from].iter().rposition(|&c| c == '9')
    }

    fn next_slot(&self, from: usize) -> Option<usize> {
        self.mask[from + 1..]
            .iter()
            .position(|&c| c == '9')
            .map(|i| from + 1 + i)
    }

    /// State classes for theme resolution.
    fn state_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.is_placeholder() {
            classes.push("placeholder");
        }
        if self.invalid {
            classes.push("invalid");
        }
        if self.focused {
            classes.push("focused");
        }
        if self.disabled {
            classes.push("disabled");
        }
        classes
    }

    /// Display chars: the free-form placeholder replaces the mask only
    /// while the field is empty and unfocused, so slots stay visible
    /// during editing.
    fn display_chars(&self) -> Vec<char> {
        if self.is_placeholder() && !self.focused {
            if let Some(text) = &self.display_placeholder {
                return text.chars().collect();
            }
        }
        self.chars.clone()
    }
}

impl Widget for DateInput {
    fn widget_type(&self) -> &str {
        "input"
    }

    fn can_focus(&self) -> bool {
        !self.disabled
    }

    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip> {
        if region.width <= 0 || region.height <= 0 {
            return Vec::new();
        }

        let classes = self.state_classes();
        let style = theme.resolve("input", &classes);
        // Padding keeps the base style so placeholder dimming does not
        // bleed past the text.
        let pad_classes: Vec<&str> = classes
            .iter()
            .copied()
            .filter(|&c| c != "placeholder")
            .collect();
        let pad_style = theme.resolve("input", &pad_classes);

        let width = region.width as usize;
        let show_cursor = self.focused && !self.disabled;

        let mut strip = Strip::new(region.y, region.x);
        for (i, ch) in self.display_chars().into_iter().take(width).enumerate() {
            let mut cell_style = style.clone();
            if show_cursor && i == self.cursor {
                cell_style.reverse = !cell_style.reverse;
            }
            strip.push(ch, cell_style);
        }
        strip.fill(region.width, pad_style);

        vec![strip]
    }
}

// ---------------------------------------------------------------------------
// Mask helpers
// ---------------------------------------------------------------------------

fn first_slot(mask: &[char]) -> usize {
    mask.iter().position(|&c| c == '9').unwrap_or(0)
}

fn last_slot(mask: &[char]) -> usize {
    mask.iter().rposition(|&c| c == '9').unwrap_or(0)
}

// ===========================================================================
// Tests
// ===========================================================================
