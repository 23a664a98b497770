//! Start/end date pairs and the swap-on-commit ordering rule.

use super::value::DateValue;

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// A possibly-incomplete date range.
///
/// `start` alone is the transient "awaiting second click" state while a
/// range is being built. Committed ranges are stored ordered; callers
/// comparing endpoints go through [`ordered`] first so storage order
/// never matters.
///
/// [`ordered`]: DateRange::ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    pub start: Option<DateValue>,
    pub end: Option<DateValue>,
}

impl DateRange {
    /// No endpoints.
    pub const EMPTY: DateRange = DateRange { start: None, end: None };

    /// A complete range, ordered regardless of argument order.
    pub fn new(a: DateValue, b: DateValue) -> Self {
        DateRange {
            start: Some(a),
            end: Some(b),
        }
        .ordered()
    }

    /// The transient start-only range.
    pub fn starting(start: DateValue) -> Self {
        DateRange {
            start: Some(start),
            end: None,
        }
    }

    /// Endpoints swapped if inverted; otherwise unchanged. Symmetric:
    /// swapping `start` and `end` first gives the same result.
    pub fn ordered(self) -> Self {
        match (self.start, self.end) {
            (Some(s), Some(e)) if e < s => DateRange {
                start: Some(e),
                end: Some(s),
            },
            _ => self,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
