#![forbid(unsafe_code)]

//! A bordered container with an optional title.
//!
//! The block renders its frame and background; content is rendered by
//! the caller into [`Block::inner`]. Corners are drawn only when both
//! adjacent sides are present, and the title is clipped to the top edge
//! with one cell of breathing room on each side.

use std::borrow::Cow;

use r72_core::Rect;
use r72_core::text_width::display_width;
use r72_layout::Alignment;
use r72_render::Frame;
use r72_render::cell::Cell;
use r72_style::Style;

use crate::borders::{BorderSet, BorderType, Borders};
use crate::{Widget, apply_style, draw_text, set_style_area};

#[derive(Debug, Clone, Default)]
pub struct Block {
    borders: Borders,
    border_type: BorderType,
    border_style: Style,
    style: Style,
    title: Option<Cow<'static, str>>,
    title_alignment: Alignment,
}

impl Block {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A block with all four borders.
    #[must_use]
    pub fn bordered() -> Self {
        Self::new().borders(Borders::ALL)
    }

    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Base style applied to the whole area before anything is drawn.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    /// The content area inside the borders.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;
        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }
        inner
    }

    fn border_cell(&self, ch: char) -> Cell {
        let mut cell = Cell::from_char(ch);
        apply_style(&mut cell, self.style);
        apply_style(&mut cell, self.border_style);
        cell
    }

    fn render_borders(&self, area: Rect, frame: &mut Frame) {
        let set: BorderSet = self.border_type.to_border_set();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        if self.borders.contains(Borders::TOP) {
            for x in area.x..=right {
                frame.buffer.set(x, area.y, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..=right {
                frame.buffer.set(x, bottom, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::LEFT) {
            for y in area.y..=bottom {
                frame.buffer.set(area.x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..=bottom {
                frame.buffer.set(right, y, self.border_cell(set.vertical));
            }
        }

        if self.borders.contains(Borders::TOP | Borders::LEFT) {
            frame.buffer.set(area.x, area.y, self.border_cell(set.top_left));
        }
        if self.borders.contains(Borders::TOP | Borders::RIGHT) {
            frame.buffer.set(right, area.y, self.border_cell(set.top_right));
        }
        if self.borders.contains(Borders::BOTTOM | Borders::LEFT) {
            frame
                .buffer
                .set(area.x, bottom, self.border_cell(set.bottom_left));
        }
        if self.borders.contains(Borders::BOTTOM | Borders::RIGHT) {
            frame
                .buffer
                .set(right, bottom, self.border_cell(set.bottom_right));
        }
    }

    fn render_title(&self, area: Rect, frame: &mut Frame) {
        let Some(title) = &self.title else { return };
        if !self.borders.contains(Borders::TOP) || area.width < 4 {
            return;
        }
        // One border corner plus one pad cell on each side.
        let avail = (area.width - 4) as usize;
        let width = display_width(title).min(avail) as u16;
        let x = match self.title_alignment {
            Alignment::Left => area.x + 2,
            Alignment::Center => area.x + (area.width.saturating_sub(width)) / 2,
            Alignment::Right => area.x + area.width.saturating_sub(width + 2),
        };
        let style = self.border_style.merge(&self.style);
        draw_text(
            &mut frame.buffer,
            x,
            area.y,
            title,
            style,
            x.saturating_add(width),
        );
    }
}

impl Widget for Block {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }
        if !self.style.is_empty() {
            set_style_area(&mut frame.buffer, area, self.style);
        }
        if !self.borders.is_empty() {
            self.render_borders(area, frame);
        }
        self.render_title(area, frame);
    }
}
