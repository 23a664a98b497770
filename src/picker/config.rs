//! Picker configuration: selection mode, ranges, bounds, chrome.

use thiserror::Error;

use crate::calendar::{Selection, SelectionMode};
use crate::date::{DateError, DateFormat, DateValue};
use crate::overlay::CalendarPlacement;

/// Errors raised while validating a [`DatePickerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A min or max bound string did not parse as an ISO date.
    #[error("invalid {which} bound {text:?}: {source}")]
    InvalidBound {
        which: &'static str,
        text: String,
        #[source]
        source: DateError,
    },

    /// The minimum bound lies after the maximum bound.
    #[error("minimum date {min} is after maximum date {max}")]
    InvertedBounds { min: DateValue, max: DateValue },

    /// The initial value's shape does not match the selection mode.
    #[error("initial value does not match the configured selection mode")]
    ModeMismatch,
}

/// Builder-style configuration for a `DatePicker`.
///
/// `min_date` and `max_date` take ISO `yyyy-mm-dd` strings and are
/// validated when the picker is constructed.
#[derive(Debug, Clone)]
pub struct DatePickerConfig {
    pub mode: SelectionMode,
    pub format: DateFormat,
    pub initial_value: Option<Selection>,
    pub display_date: Option<DateValue>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub placement: CalendarPlacement,
    pub flip: bool,
    pub disabled: bool,
    pub placeholder: Option<String>,
    pub invalid_feedback: String,
    pub clear_button_class: String,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            format: DateFormat::DayMonthYear,
            initial_value: None,
            display_date: None,
            min_date: None,
            max_date: None,
            placement: CalendarPlacement::Down,
            flip: true,
            disabled: false,
            placeholder: None,
            invalid_feedback: "Please enter a valid date".to_owned(),
            clear_button_class: "primary".to_owned(),
        }
    }
}

impl DatePickerConfig {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_initial_value(mut self, value: Selection) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn with_display_date(mut self, date: DateValue) -> Self {
        self.display_date = Some(date);
        self
    }

    pub fn with_min_date(mut self, iso: impl Into<String>) -> Self {
        self.min_date = Some(iso.into());
        self
    }

    pub fn with_max_date(mut self, iso: impl Into<String>) -> Self {
        self.max_date = Some(iso.into());
        self
    }

    pub fn with_placement(mut self, placement: CalendarPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_invalid_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.invalid_feedback = feedback.into();
        self
    }

    pub fn with_clear_button_class(mut self, class: impl Into<String>) -> Self {
        self.clear_button_class = class.into();
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
