//! Input event types wrapping crossterm for decoupling.
//!
//! Defines [`InputEvent`], [`KeyEvent`], [`MouseEvent`] and supporting
//! types. Crossterm events convert via `From` impls so hosts can feed
//! widgets directly from a crossterm read loop while the widgets never
//! depend on crossterm types.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm. Only the keys the widgets
/// bind are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press without modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

// ---------------------------------------------------------------------------
// MouseBtn / MouseAction / MouseEvent
// ---------------------------------------------------------------------------

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

/// Mouse action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseBtn),
    Up(MouseBtn),
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A mouse event with action, position, and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseAction,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    FocusGained,
    FocusLost,
    Paste(String),
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

/// Convert crossterm key modifiers to our `Modifiers`.
fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.contains(crossterm::event::KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(crossterm::event::KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(crossterm::event::KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(ct: crossterm::event::KeyEvent) -> Self {
        let code = match ct.code {
            crossterm::event::KeyCode::Char(c) => Key::Char(c),
            crossterm::event::KeyCode::Enter => Key::Enter,
            crossterm::event::KeyCode::Esc => Key::Escape,
            crossterm::event::KeyCode::Tab => Key::Tab,
            crossterm::event::KeyCode::BackTab => Key::BackTab,
            crossterm::event::KeyCode::Backspace => Key::Backspace,
            crossterm::event::KeyCode::Delete => Key::Delete,
            crossterm::event::KeyCode::Left => Key::Left,
            crossterm::event::KeyCode::Right => Key::Right,
            crossterm::event::KeyCode::Up => Key::Up,
            crossterm::event::KeyCode::Down => Key::Down,
            crossterm::event::KeyCode::Home => Key::Home,
            crossterm::event::KeyCode::End => Key::End,
            // Keys the widgets never bind collapse to Escape.
            _ => Key::Escape,
        };
        KeyEvent {
            code,
            modifiers: convert_modifiers(ct.modifiers),
        }
    }
}

/// Convert a crossterm mouse button to our `MouseBtn`.
fn convert_mouse_button(b: crossterm::event::MouseButton) -> MouseBtn {
    match b {
        crossterm::event::MouseButton::Left => MouseBtn::Left,
        crossterm::event::MouseButton::Right => MouseBtn::Right,
        crossterm::event::MouseButton::Middle => MouseBtn::Middle,
    }
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(ct: crossterm::event::Event) -> Self {
        match ct {
            crossterm::event::Event::Key(ke) => InputEvent::Key(KeyEvent::from(ke)),
            crossterm::event::Event::Mouse(me) => {
                let kind = match me.kind {
                    crossterm::event::MouseEventKind::Down(b) => {
                        MouseAction::Down(convert_mouse_button(b))
                    }
                    crossterm::event::MouseEventKind::Up(b) => {
                        MouseAction::Up(convert_mouse_button(b))
                    }
                    crossterm::event::MouseEventKind::Moved
                    | crossterm::event::MouseEventKind::Drag(_) => MouseAction::Moved,
                    crossterm::event::MouseEventKind::ScrollUp => MouseAction::ScrollUp,
                    // Any other scroll variant collapses to ScrollDown.
                    _ => MouseAction::ScrollDown,
                };
                InputEvent::Mouse(MouseEvent {
                    kind,
                    x: me.column,
                    y: me.row,
                    modifiers: convert_modifiers(me.modifiers),
                })
            }
            crossterm::event::Event::Resize(w, h) => InputEvent::Resize {
                width: w,
                height: h,
            },
            crossterm::event::Event::FocusGained => InputEvent::FocusGained,
            crossterm::event::Event::FocusLost => InputEvent::FocusLost,
            crossterm::event::Event::Paste(s) => InputEvent::Paste(s),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
        assert!(!Modifiers::CTRL.is_empty());
    }

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert_eq!(mods & Modifiers::CTRL, Modifiers::CTRL);
    }

    #[test]
    fn modifiers_contains_none() {
        assert!(Modifiers::SHIFT.contains(Modifiers::NONE));
        assert!(Modifiers::NONE.contains(Modifiers::NONE));
    }

    // ── KeyEvent ─────────────────────────────────────────────────────

    #[test]
    fn key_event_plain() {
        let ke = KeyEvent::plain(Key::Enter);
        assert_eq!(ke.code, Key::Enter);
        assert!(ke.modifiers.is_empty());
    }

    // ── From<crossterm::event::KeyEvent> ─────────────────────────────

    #[test]
    fn from_crossterm_key_char() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('7'),
            crossterm::event::KeyModifiers::NONE,
        );
        let ke = KeyEvent::from(ct);
        assert_eq!(ke.code, Key::Char('7'));
        assert!(ke.modifiers.is_empty());
    }

    #[test]
    fn from_crossterm_key_with_shift() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::BackTab,
            crossterm::event::KeyModifiers::SHIFT,
        );
        let ke = KeyEvent::from(ct);
        assert_eq!(ke.code, Key::BackTab);
        assert!(ke.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn from_crossterm_key_bindable_set() {
        for (ct_code, expected) in [
            (crossterm::event::KeyCode::Enter, Key::Enter),
            (crossterm::event::KeyCode::Esc, Key::Escape),
            (crossterm::event::KeyCode::Tab, Key::Tab),
            (crossterm::event::KeyCode::Backspace, Key::Backspace),
            (crossterm::event::KeyCode::Delete, Key::Delete),
            (crossterm::event::KeyCode::Left, Key::Left),
            (crossterm::event::KeyCode::Right, Key::Right),
            (crossterm::event::KeyCode::Up, Key::Up),
            (crossterm::event::KeyCode::Down, Key::Down),
            (crossterm::event::KeyCode::Home, Key::Home),
            (crossterm::event::KeyCode::End, Key::End),
        ] {
            let ct = crossterm::event::KeyEvent::new(ct_code, crossterm::event::KeyModifiers::NONE);
            assert_eq!(KeyEvent::from(ct).code, expected);
        }
    }

    #[test]
    fn from_crossterm_unbound_key_collapses() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::F(5),
            crossterm::event::KeyModifiers::NONE,
        );
        assert_eq!(KeyEvent::from(ct).code, Key::Escape);
    }

    // ── From<crossterm::event::Event> ────────────────────────────────

    #[test]
    fn from_crossterm_event_key() {
        let ct = crossterm::event::Event::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('q'),
            crossterm::event::KeyModifiers::NONE,
        ));
        match InputEvent::from(ct) {
            InputEvent::Key(ke) => assert_eq!(ke.code, Key::Char('q')),
            other => panic!("expected Key event, got {other:?}"),
        }
    }

    #[test]
    fn from_crossterm_event_resize_and_focus() {
        assert_eq!(
            InputEvent::from(crossterm::event::Event::Resize(120, 40)),
            InputEvent::Resize {
                width: 120,
                height: 40
            }
        );
        assert_eq!(
            InputEvent::from(crossterm::event::Event::FocusLost),
            InputEvent::FocusLost
        );
    }

    #[test]
    fn from_crossterm_event_paste() {
        let ct = crossterm::event::Event::Paste("18/03/2022".to_string());
        assert_eq!(
            InputEvent::from(ct),
            InputEvent::Paste("18/03/2022".to_string())
        );
    }

    // ── MouseEvent ───────────────────────────────────────────────────

    #[test]
    fn mouse_event_from_crossterm() {
        let ct = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        match InputEvent::from(ct) {
            InputEvent::Mouse(me) => {
                assert_eq!(me.kind, MouseAction::Down(MouseBtn::Left));
                assert_eq!(me.x, 10);
                assert_eq!(me.y, 5);
                assert!(me.modifiers.is_empty());
            }
            other => panic!("expected Mouse event, got {other:?}"),
        }
    }

    #[test]
    fn mouse_drag_collapses_to_moved() {
        let ct = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Drag(crossterm::event::MouseButton::Left),
            column: 3,
            row: 7,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        match InputEvent::from(ct) {
            InputEvent::Mouse(me) => assert_eq!(me.kind, MouseAction::Moved),
            other => panic!("expected Mouse event, got {other:?}"),
        }
    }

    #[test]
    fn mouse_scroll_from_crossterm() {
        let ct = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        match InputEvent::from(ct) {
            InputEvent::Mouse(me) => assert_eq!(me.kind, MouseAction::ScrollUp),
            other => panic!("expected Mouse event, got {other:?}"),
        }
    }
}
