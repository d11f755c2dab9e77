#![forbid(unsafe_code)]

//! Screen geometry: rectangles and edge insets.
//!
//! All coordinates are zero-based cell positions with the origin at the
//! top-left of the terminal. Arithmetic saturates so that degenerate
//! terminal sizes (0x0 during resize storms) never panic or wrap.

/// A rectangular region of the screen, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a rectangle from position and size.
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// First column to the right of the rectangle.
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row below the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// True when the rectangle covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the cell at (x, y) lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The overlapping region of two rectangles, empty if disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            return Rect::default();
        }
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Shrink the rectangle by per-edge insets. Collapses to empty rather
    /// than wrapping when the insets exceed the size.
    #[must_use]
    pub fn inner(&self, sides: Sides) -> Rect {
        let horizontal = sides.left.saturating_add(sides.right);
        let vertical = sides.top.saturating_add(sides.bottom);
        if self.width <= horizontal || self.height <= vertical {
            return Rect::default();
        }
        Rect::new(
            self.x.saturating_add(sides.left),
            self.y.saturating_add(sides.top),
            self.width - horizontal,
            self.height - vertical,
        )
    }
}

/// Per-edge insets, used with [`Rect::inner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// The same inset on all four edges.
    #[must_use]
    pub const fn uniform(n: u16) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Horizontal-only insets (left and right).
    #[must_use]
    pub const fn horizontal(n: u16) -> Self {
        Self {
            top: 0,
            right: n,
            bottom: 0,
            left: n,
        }
    }
}
