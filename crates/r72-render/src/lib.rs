#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, diffs, and ANSI presentation.
//!
//! The application's view renders widgets into a [`frame::Frame`]. The
//! runtime diffs the frame's buffer against the previously presented one
//! and hands the changes to the [`presenter::Presenter`], which emits the
//! minimal ANSI byte stream in a single buffered write. Rendering is
//! deterministic: the same model state always produces the same buffer,
//! which is what the tests assert against via [`buffer::Buffer::to_lines`].

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod diff;
pub mod frame;
pub mod presenter;

pub use buffer::Buffer;
pub use cell::{Cell, CellContent, PackedRgba, StyleFlags};
pub use diff::{BufferDiff, ChangeRun};
pub use frame::Frame;
pub use presenter::Presenter;
