#![forbid(unsafe_code)]

//! Input event polling and translation.
//!
//! [`CrosstermEventSource`] adapts the crossterm backend into the
//! canonical [`Event`] type. Backend events with no canonical
//! representation (mouse reports, unmapped keys) are dropped at this
//! boundary.

use std::io;
use std::time::Duration;

use r72_core::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};

/// Source of terminal events for the program loop.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    ///
    /// Returns `Ok(None)` on timeout, or when the backend delivered an
    /// event that cannot be represented canonically.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// The crossterm-backed event source.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        Ok(convert_event(crossterm::event::read()?))
    }
}

fn convert_event(event: crossterm::event::Event) -> Option<Event> {
    use crossterm::event::Event as Ct;
    match event {
        Ct::Key(key) => convert_key(key).map(Event::Key),
        Ct::Resize(width, height) => Some(Event::Resize { width, height }),
        Ct::Paste(text) => Some(Event::Paste(text)),
        Ct::FocusGained => Some(Event::Focus(true)),
        Ct::FocusLost => Some(Event::Focus(false)),
        Ct::Mouse(_) => None,
    }
}

fn convert_key(key: crossterm::event::KeyEvent) -> Option<KeyEvent> {
    Some(KeyEvent {
        code: convert_key_code(key.code)?,
        modifiers: convert_modifiers(key.modifiers),
        kind: convert_kind(key.kind),
    })
}

fn convert_key_code(code: crossterm::event::KeyCode) -> Option<KeyCode> {
    use crossterm::event::KeyCode as Ct;
    Some(match code {
        Ct::Char(c) => KeyCode::Char(c),
        Ct::Enter => KeyCode::Enter,
        Ct::Esc => KeyCode::Escape,
        Ct::Backspace => KeyCode::Backspace,
        Ct::Delete => KeyCode::Delete,
        Ct::Tab => KeyCode::Tab,
        Ct::BackTab => KeyCode::BackTab,
        Ct::Left => KeyCode::Left,
        Ct::Right => KeyCode::Right,
        Ct::Up => KeyCode::Up,
        Ct::Down => KeyCode::Down,
        Ct::Home => KeyCode::Home,
        Ct::End => KeyCode::End,
        Ct::F(n) => KeyCode::F(n),
        _ => return None,
    })
}

fn convert_modifiers(modifiers: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers as Ct;
    let mut out = Modifiers::NONE;
    if modifiers.contains(Ct::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if modifiers.contains(Ct::ALT) {
        out |= Modifiers::ALT;
    }
    if modifiers.contains(Ct::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if modifiers.contains(Ct::SUPER) {
        out |= Modifiers::SUPER;
    }
    out
}

fn convert_kind(kind: crossterm::event::KeyEventKind) -> KeyEventKind {
    use crossterm::event::KeyEventKind as Ct;
    match kind {
        Ct::Press => KeyEventKind::Press,
        Ct::Repeat => KeyEventKind::Repeat,
        Ct::Release => KeyEventKind::Release,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        Event as CtEvent, KeyCode as CtKeyCode, KeyEvent as CtKeyEvent,
        KeyEventKind as CtKeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    };

    #[test]
    fn plain_key_press_converts() {
        let ct = CtEvent::Key(CtKeyEvent::new(CtKeyCode::Char('5'), KeyModifiers::NONE));
        let ev = convert_event(ct);
        assert_eq!(
            ev,
            Some(Event::Key(KeyEvent::new(KeyCode::Char('5'))))
        );
    }

    #[test]
    fn esc_and_backtab_map_to_canonical_codes() {
        assert_eq!(convert_key_code(CtKeyCode::Esc), Some(KeyCode::Escape));
        assert_eq!(convert_key_code(CtKeyCode::BackTab), Some(KeyCode::BackTab));
        assert_eq!(convert_key_code(CtKeyCode::F(5)), Some(KeyCode::F(5)));
    }

    #[test]
    fn unmapped_key_codes_are_dropped() {
        assert_eq!(convert_key_code(CtKeyCode::Null), None);
        assert_eq!(convert_key_code(CtKeyCode::Insert), None);
    }

    #[test]
    fn modifiers_translate_bit_for_bit() {
        let m = convert_modifiers(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert!(m.contains(Modifiers::CTRL));
        assert!(m.contains(Modifiers::SHIFT));
        assert!(!m.contains(Modifiers::ALT));
    }

    #[test]
    fn release_kind_is_preserved() {
        let ct = CtEvent::Key(CtKeyEvent::new_with_kind(
            CtKeyCode::Enter,
            KeyModifiers::NONE,
            CtKeyEventKind::Release,
        ));
        let Some(Event::Key(key)) = convert_event(ct) else {
            panic!("expected a key event");
        };
        assert_eq!(key.kind, KeyEventKind::Release);
        assert!(!key.is_press());
    }

    #[test]
    fn resize_paste_and_focus_convert() {
        assert_eq!(
            convert_event(CtEvent::Resize(80, 24)),
            Some(Event::Resize {
                width: 80,
                height: 24
            })
        );
        assert_eq!(
            convert_event(CtEvent::Paste("1000".into())),
            Some(Event::Paste("1000".into()))
        );
        assert_eq!(convert_event(CtEvent::FocusGained), Some(Event::Focus(true)));
        assert_eq!(convert_event(CtEvent::FocusLost), Some(Event::Focus(false)));
    }

    #[test]
    fn mouse_events_are_dropped() {
        let mouse = CtEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(convert_event(mouse), None);
    }
}
