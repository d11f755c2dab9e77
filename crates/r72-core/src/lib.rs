#![forbid(unsafe_code)]

//! Core vocabulary for Rule72: input events, screen geometry, and text
//! width measurement.
//!
//! This crate has no terminal dependency. The runtime translates backend
//! events into the types defined here; everything above it (layout,
//! widgets, the application model) speaks only this vocabulary, which is
//! what keeps the calculator core testable without a terminal.

pub mod event;
pub mod geometry;
pub mod text_width;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use geometry::{Rect, Sides};
