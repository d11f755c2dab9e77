#![forbid(unsafe_code)]

//! Elm-style update/view loop.
//!
//! The program runtime separates state ([`Model`]) from rendering and
//! uses a command pattern for the few side effects models may request.
//!
//! # Example
//!
//! ```ignore
//! use r72_runtime::{Cmd, Model};
//! use r72_core::Event;
//! use r72_render::Frame;
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Key(k) if k.is_char('q') => Msg::Quit,
//!             _ => Msg::Increment,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Increment => {
//!                 self.count += 1;
//!                 Cmd::none()
//!             }
//!             Msg::Quit => Cmd::quit(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         // render the count into the frame
//!     }
//! }
//! ```

use std::io::{self, Write};
use std::time::Duration;

use r72_core::Event;
use r72_render::Frame;
use r72_render::diff::BufferDiff;
use r72_render::presenter::Presenter;

use crate::event_source::{CrosstermEventSource, EventSource};
use crate::terminal::TerminalSession;

/// Application state and behavior.
pub trait Model: Sized {
    /// The message type driving state transitions. Must be convertible
    /// from terminal events.
    type Message: From<Event> + Send + 'static;

    /// Called once before the first frame. Returns startup commands.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// The state transition function.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state into a frame.
    fn view(&self, frame: &mut Frame);
}

/// Side effects requested by `init` and `update`.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Stop the event loop.
    Quit,
    /// Feed a message back into the model.
    Msg(M),
    /// Execute several commands in order.
    Batch(Vec<Cmd<M>>),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// A batch of commands. Empty batches collapse to `None` and a
    /// single-element batch to that element.
    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// Configuration for the program runtime.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Input poll timeout per loop iteration.
    pub poll_timeout: Duration,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
        }
    }
}

/// The runtime that owns a model and drives its update/view loop.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
    running: bool,
    dirty: bool,
}

impl<M: Model> Program<M> {
    pub fn new(model: M) -> Self {
        Self::with_config(model, ProgramConfig::default())
    }

    pub fn with_config(model: M, config: ProgramConfig) -> Self {
        Self {
            model,
            config,
            running: true,
            dirty: true,
        }
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run the event loop on the real terminal until the model quits.
    ///
    /// The terminal session is restored on every exit path, including
    /// errors propagated out of the loop.
    pub fn run(&mut self) -> io::Result<()> {
        let session = TerminalSession::fullscreen()?;
        let (width, height) = session.size()?;

        let mut source = CrosstermEventSource;
        let mut presenter = Presenter::new(io::stdout());
        let mut prev = Frame::new(width, height);
        presenter.clear_screen()?;

        self.run_loop(&mut source, &mut presenter, &mut prev)
    }

    fn run_loop<S, W>(
        &mut self,
        source: &mut S,
        presenter: &mut Presenter<W>,
        prev: &mut Frame,
    ) -> io::Result<()>
    where
        S: EventSource,
        W: Write,
    {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
        self.render_frame(presenter, prev)?;

        while self.running {
            if let Some(event) = source.poll(self.config.poll_timeout)? {
                #[cfg(feature = "tracing")]
                tracing::debug!(?event, "event received");

                if let Event::Resize { width, height } = event {
                    // Dropping the previous buffer's content forces a
                    // full repaint at the new size.
                    presenter.clear_screen()?;
                    prev.resize(width, height);
                }
                self.dispatch(event.into());
            }
            if self.dirty && self.running {
                self.render_frame(presenter, prev)?;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => self.dispatch(m),
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
        }
    }

    fn render_frame<W: Write>(
        &mut self,
        presenter: &mut Presenter<W>,
        prev: &mut Frame,
    ) -> io::Result<()> {
        let mut frame = Frame::new(prev.buffer.width(), prev.buffer.height());
        self.model.view(&mut frame);

        let diff = BufferDiff::compute(&prev.buffer, &frame.buffer);
        #[cfg(feature = "tracing")]
        tracing::trace!(runs = diff.len(), "frame presented");

        presenter.present(&frame.buffer, &diff, frame.cursor(), frame.cursor_visible())?;
        *prev = frame;
        self.dirty = false;
        Ok(())
    }
}
