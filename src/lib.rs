//! # almanac-tui
//!
//! A calendar date picker widget for terminal UIs built on
//! [crossterm](https://crates.io/crates/crossterm).
//!
//! almanac-tui provides a masked text field with an attached calendar popup:
//! day, month, and year grids, single-date or range selection, min/max
//! bounds, and a small stylesheet language for theming. Hosts embed the
//! [`picker::DatePicker`] widget, feed it input events, and react to the
//! [`picker::PickerEvent`]s it emits.
//!
//! ## Core Systems
//!
//! - **[`date`]** — Date values, display formats, masked parsing, ranges
//! - **[`calendar`]** — Day/month/year grids and focus-stepping arithmetic
//! - **[`picker`]** — The DatePicker widget: selection controller, config, events
//! - **[`widgets`]** — The masked [`DateInput`](widgets::DateInput) field
//! - **[`overlay`]** — Popup placement with directional flipping
//! - **[`theme`]** — Stylesheet tokenizer, parser, and selector resolution
//! - **[`event`]** — Input events decoded from crossterm
//! - **[`render`]** — Styled strip output
//! - **[`geometry`]** — Offset, Size, Region primitives
//! - **[`testing`]** — Headless pilot and snapshot helpers

// Foundation
pub mod geometry;

// Dates and calendars
pub mod calendar;
pub mod date;

// Widget system
pub mod widget;
pub mod widgets;

// The picker
pub mod overlay;
pub mod picker;

// Events and styling
pub mod event;
pub mod theme;

// Rendering
pub mod render;

// Testing support
pub mod testing;
