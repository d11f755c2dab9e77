#![forbid(unsafe_code)]

//! State-tracked ANSI emission.
//!
//! The presenter turns buffer diffs into a minimal terminal byte stream.
//! It tracks the style and cursor position it last emitted so runs that
//! continue where the previous one ended need no repositioning, and cells
//! sharing a style need a single SGR. Each frame is wrapped in a DEC 2026
//! synchronized-update envelope and flushed in one write.
//!
//! # Invariants
//! - The cursor is hidden while cells are painted and only re-shown at
//!   the position the frame requested.
//! - Style state is reset at the end of every frame, so a crash or quit
//!   never leaves the shell with leaked attributes.

use std::io::{self, BufWriter, Write};

use crate::ansi;
use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, StyleFlags};
use crate::diff::BufferDiff;

/// Size of the internal write buffer.
const BUFFER_CAPACITY: usize = 32 * 1024;

/// Last-emitted style, for change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    /// Style of the last emitted cell. `None` = unknown, emit on next cell.
    current_style: Option<CellStyle>,
    /// Where the terminal cursor sits after the last emission. `None` =
    /// unknown, reposition before the next run.
    cursor_x: Option<u16>,
    cursor_y: Option<u16>,
}

impl<W: Write> Presenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current_style: None,
            cursor_x: None,
            cursor_y: None,
        }
    }

    /// Erase the screen and forget all tracked state. Used on entry and
    /// after a resize, when the previous frame no longer describes the
    /// terminal.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.writer.write_all(ansi::SGR_RESET.as_bytes())?;
        self.writer.write_all(ansi::CLEAR_ALL.as_bytes())?;
        self.current_style = None;
        self.cursor_x = None;
        self.cursor_y = None;
        self.writer.flush()
    }

    /// Paint one frame: the changed runs of `buffer`, then the cursor
    /// request.
    pub fn present(
        &mut self,
        buffer: &Buffer,
        diff: &BufferDiff,
        cursor: Option<(u16, u16)>,
        cursor_visible: bool,
    ) -> io::Result<()> {
        self.writer.write_all(ansi::SYNC_BEGIN.as_bytes())?;
        self.writer.write_all(ansi::CURSOR_HIDE.as_bytes())?;

        for run in diff.runs() {
            self.emit_run(buffer, run.y, run.x, run.len)?;
        }

        // Leave no attributes active between frames.
        self.writer.write_all(ansi::SGR_RESET.as_bytes())?;
        self.current_style = None;

        if cursor_visible && let Some((x, y)) = cursor {
            ansi::cursor_to(&mut self.writer, x, y)?;
            self.writer.write_all(ansi::CURSOR_SHOW.as_bytes())?;
            self.cursor_x = Some(x);
            self.cursor_y = Some(y);
        }

        self.writer.write_all(ansi::SYNC_END.as_bytes())?;
        self.writer.flush()
    }

    fn emit_run(&mut self, buffer: &Buffer, y: u16, x0: u16, len: u16) -> io::Result<()> {
        let mut x = x0;
        let end = x0.saturating_add(len).min(buffer.width());
        if self.cursor_x != Some(x) || self.cursor_y != Some(y) {
            ansi::cursor_to(&mut self.writer, x, y)?;
        }
        while x < end {
            let Some(cell) = buffer.get(x, y) else { break };
            let style = CellStyle::from_cell(cell);
            if self.current_style != Some(style) {
                ansi::sgr(&mut self.writer, style.attrs, style.fg, style.bg)?;
                self.current_style = Some(style);
            }
            let mut text = String::new();
            cell.content.write_to(&mut text);
            self.writer.write_all(text.as_bytes())?;
            // A width-2 glyph consumes its follower column; the buffer
            // keeps that cell blank and we must not overpaint it.
            x = x.saturating_add(cell.width().max(1) as u16);
        }
        self.cursor_x = Some(x);
        self.cursor_y = Some(y);
        Ok(())
    }
}
