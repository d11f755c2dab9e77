#![forbid(unsafe_code)]

//! Elm-style runtime: model, messages, commands, and the event loop.
//!
//! An application implements [`Model`], turning terminal [`Event`]s into
//! its own message type and rendering into a frame. [`Program`] owns the
//! loop: enter the terminal session, poll for events, update the model,
//! diff the new frame against the previous one, and present.
//!
//! [`Event`]: r72_core::Event

pub mod event_source;
pub mod program;
pub mod terminal;

pub use event_source::{CrosstermEventSource, EventSource};
pub use program::{Cmd, Model, Program, ProgramConfig};
pub use terminal::TerminalSession;
