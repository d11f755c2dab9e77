#![forbid(unsafe_code)]

//! The screen buffer: a row-major grid of cells.
//!
//! Out-of-bounds writes are silently dropped; widgets clip themselves
//! against their area but resize races make the final guard worth having.
//! Writing a double-width cell blanks the following cell so a later
//! partial overwrite cannot leave half a glyph on screen.

use r72_core::Rect;

use crate::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// A buffer of empty cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The buffer's full area as a rectangle at the origin.
    #[must_use]
    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Write a cell. A width-2 cell also blanks its follower column.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let wide = cell.width() > 1;
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        } else {
            return;
        }
        if wide && let Some(i) = self.index(x + 1, y) {
            self.cells[i] = Cell::default();
        }
    }

    /// Fill every cell of `area` (clipped to the buffer) with a copy of
    /// `cell`.
    pub fn fill(&mut self, area: Rect, cell: &Cell) {
        let area = area.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = cell.clone();
                }
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize, dropping all content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    /// Render each row as plain text, trailing spaces trimmed.
    ///
    /// This is the test-facing view of the buffer: assertions about what
    /// is on screen match against these lines.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.height as usize);
        for y in 0..self.height {
            let mut line = String::with_capacity(self.width as usize);
            let mut skip = false;
            for x in 0..self.width {
                if skip {
                    skip = false;
                    continue;
                }
                if let Some(cell) = self.get(x, y) {
                    cell.content.write_to(&mut line);
                    if cell.width() > 1 {
                        skip = true;
                    }
                }
            }
            while line.ends_with(' ') {
                line.pop();
            }
            lines.push(line);
        }
        lines
    }

    /// True when some row's text contains `needle`. Test helper.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.to_lines().iter().any(|l| l.contains(needle))
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
