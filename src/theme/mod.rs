//! Theming: a small sheet language for widget colors and text attributes.
//!
//! A theme is a list of rules. Each rule has one or more selectors (a
//! widget type plus optional state classes, e.g. `day.selected`) and a
//! patch of style properties. Widgets call [`Theme::resolve`] with their
//! type and active state classes; matching rules are applied in
//! specificity order (more classes win, later rules break ties) to
//! produce the final [`CellStyle`].

pub mod parser;
pub mod tokenizer;

pub use parser::{parse_theme, ThemeError};
pub use tokenizer::{tokenize, Token};

use crate::render::CellStyle;

// ---------------------------------------------------------------------------
// Attrs
// ---------------------------------------------------------------------------

/// Text attribute flags set by a `text-style` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub reverse: bool,
}

// ---------------------------------------------------------------------------
// StylePatch
// ---------------------------------------------------------------------------

/// The style properties one rule contributes. `None` fields leave the
/// lower-priority value in place; a `Some` attrs replaces all six flags
/// at once (so `text-style: none` can clear inherited styling).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StylePatch {
    pub color: Option<String>,
    pub background: Option<String>,
    pub attrs: Option<Attrs>,
}

impl StylePatch {
    /// Overlay `other` on top of `self`: fields set in `other` win.
    pub fn merge(&mut self, other: &StylePatch) {
        if other.color.is_some() {
            self.color = other.color.clone();
        }
        if other.background.is_some() {
            self.background = other.background.clone();
        }
        if other.attrs.is_some() {
            self.attrs = other.attrs;
        }
    }

    /// Convert the folded patch into a concrete cell style.
    fn to_cell_style(&self) -> CellStyle {
        let attrs = self.attrs.unwrap_or_default();
        CellStyle {
            fg: self.color.clone(),
            bg: self.background.clone(),
            bold: attrs.bold,
            dim: attrs.dim,
            italic: attrs.italic,
            underline: attrs.underline,
            strikethrough: attrs.strikethrough,
            reverse: attrs.reverse,
        }
    }
}

// ---------------------------------------------------------------------------
// Selector / Rule
// ---------------------------------------------------------------------------

/// A selector: widget type plus required state classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub widget_type: String,
    pub classes: Vec<String>,
}

impl Selector {
    /// A selector matches when the widget type is equal and every selector
    /// class is present on the widget.
    pub fn matches(&self, widget_type: &str, classes: &[&str]) -> bool {
        self.widget_type == widget_type
            && self.classes.iter().all(|c| classes.contains(&c.as_str()))
    }

    /// Specificity is the class count; source order breaks ties.
    pub fn specificity(&self) -> u16 {
        self.classes.len() as u16
    }
}

/// A parsed rule: selectors sharing one style patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub patch: StylePatch,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A parsed theme sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub rules: Vec<Rule>,
}

impl Theme {
    /// Parse a theme sheet.
    pub fn parse(input: &str) -> Result<Theme, ThemeError> {
        parser::parse_theme(input)
    }

    /// A theme with no rules; every resolve yields the terminal default.
    pub fn empty() -> Theme {
        Theme { rules: Vec::new() }
    }

    /// Resolve the style for a widget type with the given state classes.
    ///
    /// All matching rules are sorted by (specificity, source order) and
    /// their patches folded in ascending order, so the most specific and
    /// latest rules override the rest.
    pub fn resolve(&self, widget_type: &str, classes: &[&str]) -> CellStyle {
        let mut matches: Vec<(u16, usize, &StylePatch)> = Vec::new();

        for (order, rule) in self.rules.iter().enumerate() {
            // A rule with several matching selectors counts once, at the
            // specificity of its best match.
            let best = rule
                .selectors
                .iter()
                .filter(|s| s.matches(widget_type, classes))
                .map(Selector::specificity)
                .max();
            if let Some(spec) = best {
                matches.push((spec, order, &rule.patch));
            }
        }

        matches.sort_by_key(|&(spec, order, _)| (spec, order));

        let mut folded = StylePatch::default();
        for (_, _, patch) in &matches {
            folded.merge(patch);
        }
        folded.to_cell_style()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::parse(DEFAULT_SHEET).unwrap_or_else(|_| Theme::empty())
    }
}

/// The built-in theme sheet. State rules come after their base rules so
/// they win ties; `focused` rules come last so the focus marker reads
/// over selection styling.
pub const DEFAULT_SHEET: &str = "\
panel { color: white; background: #1a1b26; }

header { color: white; background: #1a1b26; text-style: bold; }
header.disabled { color: #565f89; text-style: none; }
header.focused { text-style: bold reverse; }

weekday { color: #9aa5ce; background: #1a1b26; text-style: bold; }

day, month, year { color: white; background: #1a1b26; }
day.today, month.current, year.current { color: #e0af68; text-style: bold; }
day.disabled { color: #565f89; text-style: dim; }
day.in-range, month.in-range, year.in-range { background: #283457; }
day.endpoint, month.endpoint, year.endpoint { color: #1a1b26; background: #7aa2f7; text-style: bold; }
day.selected { color: #1a1b26; background: #7aa2f7; text-style: bold; }
day.focused, month.focused, year.focused { text-style: reverse; }

input { color: white; }
input.placeholder { color: #565f89; text-style: dim; }
input.invalid { color: #f7768e; }
input.focused { text-style: underline; }
input.disabled { color: #565f89; text-style: dim; }

feedback { color: #f7768e; }

button { color: white; }
button.primary { color: #7aa2f7; text-style: bold; }
button.disabled { color: #565f89; text-style: dim; }
button.focused { text-style: reverse; }
";

// ===========================================================================
// Tests
// ===========================================================================
