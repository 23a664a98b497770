//! Widget trait: the rendering seam every widget implements.
//!
//! A widget knows its theme type name and how to render itself into
//! strips within a region. Styling is pulled from the [`Theme`] at render
//! time: widgets resolve their own state classes per part, so one widget
//! can mix several resolved styles in a single frame (a day grid styles
//! every cell independently).

use crate::geometry::Region;
use crate::render::Strip;
use crate::theme::Theme;

/// Core trait implemented by all widgets.
///
/// Object-safe: the methods use `&self` and return owned types, so hosts
/// can hold `Box<dyn Widget>` collections.
pub trait Widget {
    /// The theme type name for this widget (e.g. "day", "input").
    ///
    /// Used for theme type selectors.
    fn widget_type(&self) -> &str;

    /// Render this widget's content into strips within the given region.
    ///
    /// The `region` defines the available space in terminal cells. Strips
    /// outside the region are the widget's own responsibility to avoid.
    fn render(&self, region: Region, theme: &Theme) -> Vec<Strip>;

    /// Whether this widget can receive keyboard/mouse focus.
    ///
    /// Defaults to `false`. Override for interactive widgets.
    fn can_focus(&self) -> bool {
        false
    }
}

// ===========================================================================
// Tests
// ===========================================================================
