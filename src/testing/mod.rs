//! Headless testing support: PickerPilot, snapshot helpers.
//!
//! Use the [`PickerPilot`] to drive a [`DatePicker`](crate::picker::DatePicker)
//! without a real terminal. Use [`render_to_string`] and related helpers to
//! capture widget output as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::PickerPilot;
pub use snapshot::{render_to_string, strips_to_string};
