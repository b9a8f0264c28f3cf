//! Abstract input key event, independent of terminal library.
//!
//! Keeps agdeck-app free of crossterm so the engine can be driven headlessly
//! (integration tests feed `InputKey`s straight into the message channel).

/// Abstract input key event.
/// Converted from `crossterm::event::KeyEvent` at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// The printable character carried by this key, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}
