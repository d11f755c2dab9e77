#![forbid(unsafe_code)]

//! The rendering surface handed to the view.
//!
//! A frame is a buffer plus the cursor request for this frame. Widgets
//! that own the text cursor (the focused input) set its position and
//! visibility; everything else leaves it alone. The runtime reads the
//! request after the view returns and the presenter honors it once the
//! grid has been painted.

use r72_core::Rect;

use crate::buffer::Buffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub buffer: Buffer,
    cursor: Option<(u16, u16)>,
    cursor_visible: bool,
}

impl Frame {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor: None,
            cursor_visible: false,
        }
    }

    /// The drawable area of this frame.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.buffer.area()
    }

    /// Request the terminal cursor at the given cell, or `None` to leave
    /// it parked.
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Clear the buffer and drop any cursor request, keeping the size.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = None;
        self.cursor_visible = false;
    }

    /// Resize the underlying buffer, dropping all content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.buffer.resize(width, height);
        self.cursor = None;
        self.cursor_visible = false;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
