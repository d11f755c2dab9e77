#![forbid(unsafe_code)]

//! Widgets: self-contained render units.
//!
//! A widget is configured by value, rendered into a [`Frame`] at an
//! area, and holds no reference to the frame afterwards. Input state
//! (the text fields) lives in the application model and renders through
//! `&self`; transient render-only state uses interior mutability.

pub mod block;
pub mod borders;
pub mod input;
pub mod paragraph;

pub use block::Block;
pub use borders::{BorderSet, BorderType, Borders};
pub use input::TextInput;
pub use paragraph::Paragraph;

use r72_core::Rect;
use r72_core::text_width::{grapheme_width, graphemes};
use r72_render::cell::Cell;
use r72_render::{Buffer, Frame};
use r72_style::Style;

/// Anything that can draw itself into a frame.
pub trait Widget {
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// Apply a style onto an existing cell: set colors present in the
/// style, union the attributes.
pub fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    cell.attrs |= style.attrs;
}

/// Apply a style to every cell in `area`.
pub fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    let area = area.intersection(&buf.area());
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw `text` starting at (x, y), clipped at `max_x`. Returns the
/// column after the last cell written. A cluster that would straddle
/// `max_x` is dropped whole.
pub(crate) fn draw_text(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for cluster in graphemes(text) {
        let w = grapheme_width(cluster) as u16;
        if w == 0 {
            continue;
        }
        if x + w > max_x {
            break;
        }
        let mut cell = Cell::from_grapheme(cluster);
        apply_style(&mut cell, style);
        buf.set(x, y, cell);
        x += w;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use r72_render::cell::{PackedRgba, StyleFlags};

    #[test]
    fn apply_style_unions_attrs() {
        let mut cell = Cell::from_char('a');
        cell.attrs = StyleFlags::DIM;
        apply_style(&mut cell, Style::new().attrs(StyleFlags::BOLD));
        assert!(cell.attrs.contains(StyleFlags::DIM | StyleFlags::BOLD));
    }

    #[test]
    fn apply_style_keeps_unset_colors() {
        let mut cell = Cell::from_char('a');
        cell.fg = PackedRgba::rgb(1, 2, 3);
        apply_style(&mut cell, Style::new().bg(PackedRgba::rgb(9, 9, 9)));
        assert_eq!(cell.fg, PackedRgba::rgb(1, 2, 3));
        assert_eq!(cell.bg, PackedRgba::rgb(9, 9, 9));
    }

    #[test]
    fn draw_text_clips_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        let next = draw_text(&mut buf, 0, 0, "hello world", Style::new(), 5);
        assert_eq!(next, 5);
        assert_eq!(buf.to_lines(), vec!["hello".to_string()]);
    }

    #[test]
    fn draw_text_writes_clusters_whole() {
        let mut buf = Buffer::new(10, 1);
        draw_text(&mut buf, 0, 0, "\u{0930}\u{0942}9", Style::new(), 10);
        assert!(buf.contains_text("\u{0930}\u{0942}9"));
    }
}
