#![forbid(unsafe_code)]

//! Input events delivered by the terminal backend.
//!
//! The runtime owns the translation from backend-specific events into
//! these types; nothing above the runtime ever sees a backend type. Key
//! events carry a [`KeyEventKind`] so widgets can accept both initial
//! presses and auto-repeat while ignoring release reports from terminals
//! that send them.

use bitflags::bitflags;

/// An input or lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press, repeat, or release.
    Key(KeyEvent),
    /// The terminal was resized to the given cell dimensions.
    Resize { width: u16, height: u16 },
    /// Bracketed paste content, delivered as one event.
    Paste(String),
    /// Terminal focus gained (`true`) or lost (`false`).
    Focus(bool),
}

/// A single key event with modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A plain press of `code` with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Builder-style modifier attachment.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// True for initial presses and auto-repeat, false for releases.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }

    /// True when this is a press of the given character without control
    /// or alt held. Shift is allowed so that shifted characters match.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        self.is_press()
            && self.code == KeyCode::Char(c)
            && !self
                .modifiers
                .intersects(Modifiers::CTRL | Modifiers::ALT)
    }

    /// True when this is a press of Ctrl plus the given character.
    #[must_use]
    pub fn is_ctrl(&self, c: char) -> bool {
        self.is_press()
            && self.code == KeyCode::Char(c)
            && self.modifiers.contains(Modifiers::CTRL)
    }
}

/// The physical key, normalized across backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    /// Shift-Tab as reported by most terminals.
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    F(u8),
}

/// Press phase. Terminals without the kitty keyboard protocol only ever
/// report `Press`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const ALT   = 1 << 1;
        const CTRL  = 1 << 2;
        const SUPER = 1 << 3;
    }
}
