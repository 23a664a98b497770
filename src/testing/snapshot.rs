//! Snapshot rendering helpers.
//!
//! Functions for converting rendered strips into plain-text strings
//! suitable for snapshot-style assertions.

use crate::geometry::Region;
use crate::render::Strip;
use crate::theme::Theme;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a widget to a plain text string using the default theme.
///
/// The widget is rendered into a region of `width` x `height` cells
/// starting at the origin. Each row becomes one line in the output, with
/// trailing spaces trimmed. Lines are separated by `'\n'`; the final
/// line has no trailing newline.
pub fn render_to_string(widget: &dyn Widget, width: i32, height: i32) -> String {
    render_with_theme(widget, width, height, &Theme::default())
}

/// Same as [`render_to_string`] with an explicit theme.
pub fn render_with_theme(widget: &dyn Widget, width: i32, height: i32, theme: &Theme) -> String {
    let strips = widget.render(Region::new(0, 0, width, height), theme);
    strips_to_string(&strips, width, height)
}

/// Convert raw strips to a plain text string.
///
/// Builds a `width` x `height` grid of spaces, then overlays each
/// strip's cells at its (x, y) position; later strips overwrite earlier
/// ones, matching paint order. Rows are right-trimmed and joined with
/// `'\n'`.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }

    let mut grid: Vec<Vec<char>> = vec![vec![' '; width as usize]; height as usize];

    for strip in strips {
        if strip.y < 0 || strip.y >= height {
            continue;
        }
        let row = strip.y as usize;
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if x < 0 || x >= width {
                continue;
            }
            grid[row][x as usize] = cell.ch;
        }
    }

    let lines: Vec<String> = grid
        .into_iter()
        .map(|row| {
            let s: String = row.into_iter().collect();
            s.trim_end().to_owned()
        })
        .collect();

    lines.join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================
