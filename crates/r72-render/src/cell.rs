#![forbid(unsafe_code)]

//! A single screen cell: content, colors, and attributes.
//!
//! Most cells hold a plain `char`. Grapheme clusters that span several
//! code points (the NPR symbol "रू", conjunct Devanagari syllables) are
//! stored whole so the terminal receives the complete sequence; the
//! cluster's cell width is measured once at construction and carried with
//! it.

use bitflags::bitflags;
use r72_core::text_width;

bitflags! {
    /// Text attributes mapped one-to-one onto SGR codes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u16 {
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const BLINK         = 1 << 4;
        const REVERSE       = 1 << 5;
        const HIDDEN        = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

/// A 32-bit RGBA color, packed `0xRRGGBBAA`.
///
/// Alpha zero is the transparent sentinel: a transparent foreground or
/// background falls through to the terminal's default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedRgba(u32);

impl PackedRgba {
    pub const TRANSPARENT: Self = Self(0);

    /// An opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }
}

impl Default for PackedRgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// What a cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Nothing written yet; presents as a space.
    #[default]
    Empty,
    /// A single code point.
    Char(char),
    /// A multi-code-point grapheme cluster with its measured cell width.
    Grapheme(Box<str>, u8),
}

impl CellContent {
    /// The content as a single `char`, if it is one.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            CellContent::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Display width in cells. Empty presents as a space.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            CellContent::Empty => 1,
            CellContent::Char(c) => text_width::char_width(*c).max(1),
            CellContent::Grapheme(_, w) => *w as usize,
        }
    }

    /// Append the displayed text to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            CellContent::Empty => out.push(' '),
            CellContent::Char(c) => out.push(*c),
            CellContent::Grapheme(g, _) => out.push_str(g),
        }
    }
}

/// One cell of the screen grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub content: CellContent,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
    pub attrs: StyleFlags,
}

impl Cell {
    /// An unstyled cell holding one character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            ..Self::default()
        }
    }

    /// An unstyled cell holding one grapheme cluster.
    ///
    /// Single-code-point clusters collapse to the `Char` representation.
    /// Zero-width clusters are widened to one cell so they stay visible
    /// rather than vanishing into the previous cell.
    #[must_use]
    pub fn from_grapheme(grapheme: &str) -> Self {
        let mut chars = grapheme.chars();
        let content = match (chars.next(), chars.next()) {
            (Some(c), None) => CellContent::Char(c),
            (Some(_), Some(_)) => {
                let width = text_width::grapheme_width(grapheme).clamp(1, 2) as u8;
                CellContent::Grapheme(Box::from(grapheme), width)
            }
            (None, _) => CellContent::Empty,
        };
        Self {
            content,
            ..Self::default()
        }
    }

    /// True when nothing has been written to the cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
            && self.fg.is_transparent()
            && self.bg.is_transparent()
            && self.attrs.is_empty()
    }

    /// Display width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.content.width()
    }
}
