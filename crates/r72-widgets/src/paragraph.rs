#![forbid(unsafe_code)]

//! Multi-line styled text with optional wrapping and alignment.

use r72_core::Rect;
use r72_layout::Alignment;
use r72_render::Frame;
use r72_style::Style;
use r72_text::{Line, Text, wrap_line};

use crate::block::Block;
use crate::{Widget, draw_text, set_style_area};

/// A widget that renders multi-line styled text.
///
/// Wrapping preserves per-span styles: a bold span broken across two
/// visual lines stays bold on both.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    text: Text,
    block: Option<Block>,
    style: Style,
    wrap: bool,
    alignment: Alignment,
}

impl Paragraph {
    pub fn new(text: impl Into<Text>) -> Self {
        Self {
            text: text.into(),
            block: None,
            style: Style::new(),
            wrap: false,
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Wrap at word boundaries, splitting a word only when it is wider
    /// than the area on its own.
    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Number of visual lines this paragraph occupies at `width`,
    /// excluding any block borders.
    #[must_use]
    pub fn line_count(&self, width: u16) -> usize {
        if width == 0 {
            return 0;
        }
        if !self.wrap {
            return self.text.lines.len();
        }
        self.text
            .lines
            .iter()
            .map(|line| wrap_line(line, width as usize).len().max(1))
            .sum()
    }

    fn render_line(&self, line: &Line, y: u16, text_area: Rect, frame: &mut Frame) {
        let mut x = align_x(text_area, line.width(), self.alignment);
        for span in &line.spans {
            let span_style = match span.style {
                Some(s) => s.merge(&self.style),
                None => self.style,
            };
            x = draw_text(
                &mut frame.buffer,
                x,
                y,
                span.content.as_ref(),
                span_style,
                text_area.right(),
            );
            if x >= text_area.right() {
                break;
            }
        }
    }
}

impl Widget for Paragraph {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }

        let text_area = match self.block {
            Some(ref b) => {
                b.render(area, frame);
                b.inner(area)
            }
            None => {
                if !self.style.is_empty() {
                    set_style_area(&mut frame.buffer, area, self.style);
                }
                area
            }
        };
        if text_area.is_empty() {
            return;
        }

        let mut y = text_area.y;
        for line in &self.text.lines {
            if y >= text_area.bottom() {
                break;
            }
            if self.wrap && line.width() > text_area.width as usize {
                for wrapped in wrap_line(line, text_area.width as usize) {
                    if y >= text_area.bottom() {
                        break;
                    }
                    self.render_line(&wrapped, y, text_area, frame);
                    y += 1;
                }
            } else {
                self.render_line(line, y, text_area, frame);
                y += 1;
            }
        }
    }
}

/// Starting x for a line of `line_width` cells under `alignment`.
fn align_x(area: Rect, line_width: usize, alignment: Alignment) -> u16 {
    let line_width = u16::try_from(line_width).unwrap_or(u16::MAX);
    match alignment {
        Alignment::Left => area.x,
        Alignment::Center => area.x + area.width.saturating_sub(line_width) / 2,
        Alignment::Right => area.x + area.width.saturating_sub(line_width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::borders::Borders;
    use r72_style::StyleFlags;
    use r72_text::Span;

    fn char_at(frame: &Frame, x: u16, y: u16) -> Option<char> {
        frame.buffer.get(x, y).and_then(|c| c.content.as_char())
    }

    #[test]
    fn render_simple_text() {
        let para = Paragraph::new("Hello");
        let mut frame = Frame::new(10, 1);
        para.render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(char_at(&frame, 0, 0), Some('H'));
        assert_eq!(char_at(&frame, 4, 0), Some('o'));
    }

    #[test]
    fn render_multiline_text() {
        let para = Paragraph::new("AB\nCD");
        let mut frame = Frame::new(5, 3);
        para.render(Rect::new(0, 0, 5, 3), &mut frame);
        assert_eq!(char_at(&frame, 1, 0), Some('B'));
        assert_eq!(char_at(&frame, 0, 1), Some('C'));
    }

    #[test]
    fn render_centered_text() {
        let para = Paragraph::new("Hi").alignment(Alignment::Center);
        let mut frame = Frame::new(10, 1);
        para.render(Rect::new(0, 0, 10, 1), &mut frame);
        // 10 wide minus 2 leaves 4 cells on the left.
        assert_eq!(char_at(&frame, 4, 0), Some('H'));
        assert_eq!(char_at(&frame, 5, 0), Some('i'));
    }

    #[test]
    fn render_right_aligned() {
        let para = Paragraph::new("Hi").alignment(Alignment::Right);
        let mut frame = Frame::new(10, 1);
        para.render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(char_at(&frame, 8, 0), Some('H'));
        assert_eq!(char_at(&frame, 9, 0), Some('i'));
    }

    #[test]
    fn word_wrap_breaks_between_words() {
        let para = Paragraph::new("hello world").wrap(true);
        let mut frame = Frame::new(6, 3);
        para.render(Rect::new(0, 0, 6, 3), &mut frame);
        assert_eq!(char_at(&frame, 0, 0), Some('h'));
        assert_eq!(char_at(&frame, 0, 1), Some('w'));
    }

    #[test]
    fn wrap_keeps_span_styles() {
        let line = Line::from_spans(vec![
            Span::raw("rate of "),
            Span::styled("interest", Style::new().attrs(StyleFlags::BOLD)),
        ]);
        let para = Paragraph::new(Text::from(line)).wrap(true);
        let mut frame = Frame::new(10, 3);
        para.render(Rect::new(0, 0, 10, 3), &mut frame);
        // "interest" lands on the second visual line, still bold.
        assert_eq!(char_at(&frame, 0, 1), Some('i'));
        let cell = frame.buffer.get(0, 1).cloned();
        assert!(cell.is_some_and(|c| c.attrs.contains(StyleFlags::BOLD)));
    }

    #[test]
    fn clipped_at_area_height() {
        let para = Paragraph::new("A\nB\nC\nD");
        let mut frame = Frame::new(5, 2);
        para.render(Rect::new(0, 0, 5, 2), &mut frame);
        assert_eq!(char_at(&frame, 0, 1), Some('B'));
        assert!(frame.buffer.to_lines()[1] == "B");
    }

    #[test]
    fn clipped_at_area_width() {
        let para = Paragraph::new("ABCDEF");
        let mut frame = Frame::new(10, 1);
        para.render(Rect::new(0, 0, 3, 1), &mut frame);
        assert_eq!(char_at(&frame, 2, 0), Some('C'));
        assert!(frame.buffer.get(3, 0).is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn block_wraps_content() {
        let para = Paragraph::new("Hi").block(Block::bordered());
        let mut frame = Frame::new(8, 3);
        para.render(Rect::new(0, 0, 8, 3), &mut frame);
        // Text starts inside the border.
        assert_eq!(char_at(&frame, 1, 1), Some('H'));
        assert_eq!(char_at(&frame, 0, 0), Some('┌'));
    }

    #[test]
    fn line_count_without_wrap_is_line_total() {
        let para = Paragraph::new("a\nb\nc");
        assert_eq!(para.line_count(40), 3);
    }

    #[test]
    fn line_count_with_wrap_counts_visual_lines() {
        let para = Paragraph::new("hello world again").wrap(true);
        assert_eq!(para.line_count(6), 3);
        assert_eq!(para.line_count(40), 1);
    }

    #[test]
    fn empty_area_is_a_no_op() {
        let para = Paragraph::new("Hello");
        let mut frame = Frame::new(4, 2);
        para.render(Rect::new(0, 0, 0, 0), &mut frame);
        assert!(frame.buffer.get(0, 0).is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn top_border_only_block() {
        let para = Paragraph::new("Hi").block(Block::new().borders(Borders::TOP));
        let mut frame = Frame::new(6, 3);
        para.render(Rect::new(0, 0, 6, 3), &mut frame);
        assert_eq!(char_at(&frame, 0, 1), Some('H'));
    }

    #[test]
    fn align_x_saturates_for_wide_lines() {
        let area = Rect::new(0, 0, 10, 1);
        assert_eq!(align_x(area, 20, Alignment::Right), 0);
        assert_eq!(align_x(area, 20, Alignment::Center), 0);
    }
}
