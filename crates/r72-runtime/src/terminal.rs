#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! RAII wrapper around raw mode and the alternate screen. Enabled modes
//! are tracked as flags and undone in reverse order on drop, and a panic
//! hook restores the terminal before the panic message prints so it lands
//! on a sane screen.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

// The presenter brackets every frame in synchronized-update markers; end
// any open bracket during cleanup so a crash mid-present cannot leave the
// terminal holding back output.
const SYNC_END: &[u8] = b"\x1b[?2026l";

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// A raw-mode terminal session on the alternate screen.
///
/// Only one session may exist at a time. Dropping it restores the
/// terminal: cursor shown, alternate screen left, raw mode disabled.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen_enabled: bool,
    bracketed_paste_enabled: bool,
    focus_events_enabled: bool,
}

impl TerminalSession {
    /// Enter raw mode, switch to a cleared alternate screen, hide the
    /// cursor, and enable bracketed paste and focus reporting.
    ///
    /// # Errors
    ///
    /// Fails if raw mode cannot be enabled or another session is active.
    pub fn fullscreen() -> io::Result<Self> {
        install_panic_hook();

        if SESSION_ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(io::Error::other("terminal session already active"));
        }

        crossterm::terminal::enable_raw_mode().inspect_err(|_| {
            SESSION_ACTIVE.store(false, Ordering::SeqCst);
        })?;

        // From here on an error drops the session, which restores raw
        // mode and releases the exclusivity flag via cleanup.
        let mut session = Self {
            alternate_screen_enabled: false,
            bracketed_paste_enabled: false,
            focus_events_enabled: false,
        };

        let mut stdout = io::stdout();

        // Clear explicitly: some terminals show stale alt-screen content
        // without it.
        crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0),
            crossterm::cursor::Hide
        )?;
        session.alternate_screen_enabled = true;

        crossterm::execute!(stdout, crossterm::event::EnableBracketedPaste)?;
        session.bracketed_paste_enabled = true;

        crossterm::execute!(stdout, crossterm::event::EnableFocusChange)?;
        session.focus_events_enabled = true;

        #[cfg(feature = "tracing")]
        tracing::info!("terminal session started");

        Ok(session)
    }

    /// Current terminal size in cells.
    ///
    /// Some terminals briefly report 1x1 during startup; the result is
    /// clamped to a minimum usable size.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let (w, h) = crossterm::terminal::size()?;
        Ok((w.max(2), h.max(2)))
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();

        let _ = stdout.write_all(SYNC_END);

        if self.focus_events_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableFocusChange);
            self.focus_events_enabled = false;
        }
        if self.bracketed_paste_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableBracketedPaste);
            self.bracketed_paste_enabled = false;
        }

        // Always show the cursor before leaving.
        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);

        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }

        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();

        SESSION_ACTIVE.store(false, Ordering::SeqCst);

        #[cfg(feature = "tracing")]
        tracing::info!("terminal session restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

/// Restore the terminal on paths that skip [`Drop`], such as the panic
/// hook. Every step is best-effort and safe to repeat.
fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(SYNC_END);
    let _ = crossterm::execute!(stdout, crossterm::event::DisableFocusChange);
    let _ = crossterm::execute!(stdout, crossterm::event::DisableBracketedPaste);
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}
