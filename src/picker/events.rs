//! Events emitted by picker interactions.

use crate::date::DateValue;

/// A fully committed picker value. Range values are always ordered,
/// regardless of the order their endpoints were entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommittedValue {
    Single(DateValue),
    Range { start: DateValue, end: DateValue },
}

/// What an interaction produced. Hosts receive these from the handler
/// methods and react; the picker itself is already in its new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The committed value changed; `None` means it was emptied by the
    /// clear transition. A value dropped on blur failure or a range
    /// restart is not announced.
    Changed(Option<CommittedValue>),
    /// The value was emptied wholesale (clear control, or text deleted
    /// back to its placeholder). Followed by `Changed(None)` when a
    /// committed value was actually dropped.
    Cleared,
    /// Text entry failed validation on blur.
    Invalid,
    /// The calendar popup opened.
    Opened,
    /// The calendar popup closed.
    Closed,
}

// ===========================================================================
// Tests
// ===========================================================================
