//! Strip: a horizontal line of styled terminal cells.
//!
//! A `Strip` is the rendering primitive widgets emit: one horizontal
//! row of `StyledCell`s at an absolute position. Widgets produce
//! `Vec<Strip>` from `render()`; the host paints them with whatever
//! backend it drives. [`parse_color`] gives hosts the crossterm
//! meaning of the color strings carried in [`CellStyle`].

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Colors are stored as strings resolvable by [`parse_color`]: named
/// colors or `#rrggbb` hex values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub reverse: bool,
}

impl CellStyle {
    /// All attributes unset/false.
    pub fn new() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with default style.
    pub fn blank() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }

    /// A blank (space) cell with the given style.
    pub fn blank_styled(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal line of styled terminal cells.
///
/// Each strip occupies one row (`y`) starting at `x_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    /// The row this strip occupies.
    pub y: i32,
    /// Starting x position for this strip's cells.
    pub x_offset: i32,
    /// The cells in left-to-right order.
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create a new empty strip at the given row and x offset.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    /// Push a single character with the given style.
    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        for ch in text.chars() {
            self.cells.push(StyledCell::new(ch, style.clone()));
        }
    }

    /// The width of this strip in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// Pad the strip to exactly `width` cells using spaces with the
    /// given style; truncate if already wider.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        let w = width.max(0) as usize;
        if self.cells.len() < w {
            self.cells.resize(w, StyledCell::blank_styled(style));
        } else if self.cells.len() > w {
            self.cells.truncate(w);
        }
    }

    /// The rightmost x position (exclusive) of this strip.
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }
}

// ---------------------------------------------------------------------------
// Color parsing
// ---------------------------------------------------------------------------

/// Parse a theme color string into a crossterm `Color`.
///
/// Supports `#rrggbb` / `#rgb` hex values and the named colors
/// `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`,
/// `white`, their `dark_` variants, and `grey`/`gray`.
///
/// Returns `None` if the string cannot be parsed.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "dark_red" | "darkred" => Some(Color::DarkRed),
        "dark_green" | "darkgreen" => Some(Color::DarkGreen),
        "dark_yellow" | "darkyellow" => Some(Color::DarkYellow),
        "dark_blue" | "darkblue" => Some(Color::DarkBlue),
        "dark_magenta" | "darkmagenta" => Some(Color::DarkMagenta),
        "dark_cyan" | "darkcyan" => Some(Color::DarkCyan),
        "dark_grey" | "dark_gray" | "darkgrey" | "darkgray" => Some(Color::DarkGrey),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

/// Parse a hex color body (without the leading `#`): `rrggbb` or `rgb`.
fn parse_hex_color(hex: &str) -> Option<Color> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            // Expand: 0xA -> 0xAA
            Some(Color::Rgb {
                r: r * 16 + r,
                g: g * 16 + g,
                b: b * 16 + b,
            })
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red_style() -> CellStyle {
        CellStyle {
            fg: Some("red".into()),
            ..CellStyle::default()
        }
    }

    // ── Strip ────────────────────────────────────────────────────────

    #[test]
    fn strip_new_empty() {
        let s = Strip::new(5, 0);
        assert_eq!(s.y, 5);
        assert_eq!(s.x_offset, 0);
        assert!(s.cells.is_empty());
        assert_eq!(s.width(), 0);
    }

    #[test]
    fn strip_push_and_push_str() {
        let mut s = Strip::new(0, 0);
        s.push('X', red_style());
        s.push_str("yz", CellStyle::default());
        assert_eq!(s.width(), 3);
        assert_eq!(s.cells[0].ch, 'X');
        assert_eq!(s.cells[0].style, red_style());
        assert_eq!(s.cells[2].ch, 'z');
    }

    #[test]
    fn strip_right() {
        let mut s = Strip::new(0, 10);
        s.push_str("abc", CellStyle::default());
        assert_eq!(s.right(), 13);
    }

    #[test]
    fn strip_fill_pads_and_truncates() {
        let mut s = Strip::new(0, 0);
        s.push_str("Hi", red_style());
        s.fill(5, CellStyle::default());
        assert_eq!(s.width(), 5);
        assert_eq!(s.cells[2].ch, ' ');

        s.fill(1, CellStyle::default());
        assert_eq!(s.width(), 1);
        assert_eq!(s.cells[0].ch, 'H');
    }

    #[test]
    fn styled_cell_blank() {
        assert_eq!(StyledCell::default(), StyledCell::blank());
        assert_eq!(StyledCell::blank().ch, ' ');
    }

    // ── Color parsing ────────────────────────────────────────────────

    #[test]
    fn parse_hex_6digit() {
        assert_eq!(
            parse_color("#ff0000"),
            Some(Color::Rgb { r: 255, g: 0, b: 0 })
        );
    }

    #[test]
    fn parse_hex_3digit_expands() {
        assert_eq!(
            parse_color("#abc"),
            Some(Color::Rgb {
                r: 0xaa,
                g: 0xbb,
                b: 0xcc
            })
        );
    }

    #[test]
    fn parse_hex_invalid() {
        assert_eq!(parse_color("#ff00"), None);
        assert_eq!(parse_color("#gghhii"), None);
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("dark_grey"), Some(Color::DarkGrey));
        assert_eq!(parse_color("gray"), Some(Color::Grey));
        assert_eq!(parse_color("  blue  "), Some(Color::Blue));
    }

    #[test]
    fn parse_unknown_color() {
        assert_eq!(parse_color("rainbow"), None);
        assert_eq!(parse_color(""), None);
    }
}
