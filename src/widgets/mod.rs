//! Built-in widgets: DateInput.

pub mod date_input;

pub use date_input::DateInput;
