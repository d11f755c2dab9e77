#![forbid(unsafe_code)]

//! Single-line text input.
//!
//! Grapheme-cluster aware: the cursor moves over clusters rather than
//! code points, and horizontal scrolling never splits a wide cluster at
//! the viewport edge. Multi-line paste is flattened to a single line.

use r72_core::text_width::grapheme_width;
use r72_core::{Event, KeyCode, KeyEvent, Modifiers, Rect};
use r72_render::Frame;
use r72_render::cell::{Cell, StyleFlags};
use r72_style::Style;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Widget, apply_style, set_style_area};

/// A single-line text input widget.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Cursor position as a grapheme index.
    cursor: usize,
    /// Horizontal scroll offset in cells, updated during render.
    scroll_cells: std::cell::Cell<usize>,
    placeholder: String,
    /// Maximum length in graphemes.
    max_length: Option<usize>,
    style: Style,
    placeholder_style: Style,
    focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder methods ---

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.grapheme_count();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    #[must_use]
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    // --- Value access ---

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, clamping the cursor to the new length.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.grapheme_count());
        self.scroll_cells.set(0);
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the placeholder text shown while the value is empty.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.scroll_cells.set(0);
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Cursor screen position within a render area, for
    /// [`Frame::set_cursor`].
    #[must_use]
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let visual = self.cursor_visual_pos();
        let rel_x = visual.saturating_sub(self.effective_scroll(area.width as usize));
        let x = area
            .x
            .saturating_add(rel_x as u16)
            .min(area.right().saturating_sub(1));
        (x, area.y)
    }

    // --- Event handling ---

    /// Handle a terminal event. Returns `true` when the event was
    /// consumed, leaving unhandled keys (Enter, Tab) to the caller.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let handled = match event {
            Event::Key(key) if key.is_press() => self.handle_key(key),
            Event::Paste(text) => {
                self.insert_text(text);
                true
            }
            _ => false,
        };

        #[cfg(feature = "tracing")]
        if handled {
            self.trace_edit(Self::event_operation_name(event));
        }

        handled
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.intersects(Modifiers::CTRL | Modifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.delete_char_back();
                true
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.grapheme_count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                self.scroll_cells.set(0);
                true
            }
            KeyCode::End => {
                self.cursor = self.grapheme_count();
                true
            }
            _ => false,
        }
    }

    #[cfg(feature = "tracing")]
    fn trace_edit(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "input.edit",
            operation,
            cursor_position = self.cursor,
            grapheme_count = self.grapheme_count()
        )
        .entered();
    }

    #[cfg(feature = "tracing")]
    fn event_operation_name(event: &Event) -> &'static str {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char(_) => "insert_char",
                KeyCode::Backspace => "delete_back",
                KeyCode::Delete => "delete_forward",
                KeyCode::Left => "move_left",
                KeyCode::Right => "move_right",
                KeyCode::Home => "move_home",
                KeyCode::End => "move_end",
                _ => "key_other",
            },
            Event::Paste(_) => "paste",
            _ => "event_other",
        }
    }

    // --- Editing operations ---

    fn sanitize_input_text(text: &str) -> String {
        text.chars()
            .map(|c| {
                if c == '\n' || c == '\r' || c == '\t' {
                    ' '
                } else {
                    c
                }
            })
            .filter(|c| !c.is_control())
            .collect()
    }

    /// Insert text at the cursor, flattening line breaks to spaces and
    /// truncating to `max_length` graphemes.
    pub fn insert_text(&mut self, text: &str) {
        let clean = Self::sanitize_input_text(text);
        if clean.is_empty() {
            return;
        }

        let current_count = self.grapheme_count();
        let avail = match self.max_length {
            // Still allow one grapheme: a combining mark can merge into
            // the previous cluster without growing the count.
            Some(max) if current_count >= max => 1,
            Some(max) => max - current_count,
            None => usize::MAX,
        };

        let to_insert = if clean.graphemes(true).count() > avail {
            let end = clean
                .grapheme_indices(true)
                .map(|(i, _)| i)
                .nth(avail)
                .unwrap_or(clean.len());
            &clean[..end]
        } else {
            clean.as_str()
        };
        if to_insert.is_empty() {
            return;
        }

        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, to_insert);

        let new_count = self.grapheme_count();
        if let Some(max) = self.max_length
            && new_count > max
        {
            self.value.drain(byte_offset..byte_offset + to_insert.len());
            return;
        }

        let delta = new_count.saturating_sub(current_count);
        self.cursor = (self.cursor + delta).min(new_count);
    }

    fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }

        let old_count = self.grapheme_count();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);

        let new_count = self.grapheme_count();
        if let Some(max) = self.max_length
            && new_count > max
        {
            self.value.drain(byte_offset..byte_offset + c.len_utf8());
            return;
        }

        // A combining mark can merge into the previous cluster, in which
        // case the cursor stays on that cluster.
        if new_count > old_count {
            self.cursor += 1;
        }
    }

    fn delete_char_back(&mut self) {
        if self.cursor > 0 {
            let start = self.grapheme_byte_offset(self.cursor - 1);
            let end = self.grapheme_byte_offset(self.cursor);
            self.value.drain(start..end);
            self.cursor -= 1;
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < self.grapheme_count() {
            let start = self.grapheme_byte_offset(self.cursor);
            let end = self.grapheme_byte_offset(self.cursor + 1);
            self.value.drain(start..end);
        }
    }

    // --- Internal helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn prev_grapheme_width(&self) -> usize {
        if self.cursor == 0 {
            return 0;
        }
        self.value
            .graphemes(true)
            .nth(self.cursor - 1)
            .map_or(0, grapheme_width)
    }

    fn cursor_visual_pos(&self) -> usize {
        self.value
            .graphemes(true)
            .take(self.cursor)
            .map(grapheme_width)
            .sum()
    }

    fn effective_scroll(&self, viewport_width: usize) -> usize {
        let cursor_visual = self.cursor_visual_pos();
        let mut scroll = self.scroll_cells.get();
        if cursor_visual < scroll {
            scroll = cursor_visual;
        }
        if cursor_visual >= scroll + viewport_width {
            let candidate = cursor_visual - viewport_width + 1;
            // Keep the cluster before the cursor fully visible too, so a
            // wide cluster does not leave a half-cell hole at the left
            // edge. Cursor visibility wins in degenerate viewports.
            let prev_width = self.prev_grapheme_width();
            scroll = if viewport_width > prev_width {
                candidate.min(cursor_visual.saturating_sub(prev_width))
            } else {
                candidate
            };
        }
        scroll = self.snap_scroll_to_cluster_boundary(scroll, viewport_width);
        self.scroll_cells.set(scroll);
        scroll
    }

    /// If `scroll` falls inside a cluster, snap left to keep the cluster
    /// visible when the cursor still fits, otherwise right past it.
    fn snap_scroll_to_cluster_boundary(&self, scroll: usize, viewport_width: usize) -> usize {
        let cursor_visual = self.cursor_visual_pos();
        let mut pos = 0;
        for g in self.value.graphemes(true) {
            let next_pos = pos + grapheme_width(g);
            if pos < scroll && scroll < next_pos {
                if cursor_visual <= pos + viewport_width {
                    return pos;
                }
                return next_pos;
            }
            if next_pos > scroll {
                break;
            }
            pos = next_pos;
        }
        scroll
    }

    fn draw_scrolled(&self, text: &str, style: Style, scroll: usize, area: Rect, frame: &mut Frame) {
        let viewport = area.width as usize;
        let mut visual_x = 0usize;
        for g in text.graphemes(true) {
            let w = grapheme_width(g);
            if w == 0 {
                continue;
            }
            if visual_x < scroll {
                visual_x += w;
                continue;
            }
            let rel_x = visual_x - scroll;
            if rel_x + w > viewport {
                break;
            }
            let mut cell = Cell::from_grapheme(g);
            apply_style(&mut cell, style);
            frame
                .buffer
                .set(area.x.saturating_add(rel_x as u16), area.y, cell);
            visual_x += w;
        }
    }
}

impl Widget for TextInput {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "TextInput",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }

        set_style_area(&mut frame.buffer, area, self.style);

        let viewport = area.width as usize;
        let scroll = self.effective_scroll(viewport);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            self.draw_scrolled(&self.placeholder, self.placeholder_style, scroll, area, frame);
        } else {
            self.draw_scrolled(&self.value, self.style, scroll, area, frame);
        }

        if self.focused {
            let cursor_rel = self.cursor_visual_pos().saturating_sub(scroll);
            if cursor_rel < viewport
                && let Some(cell) = frame
                    .buffer
                    .get_mut(area.x.saturating_add(cursor_rel as u16), area.y)
            {
                cell.attrs.toggle(StyleFlags::REVERSE);
            }
            frame.set_cursor(Some(self.cursor_position(area)));
            frame.set_cursor_visible(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use r72_core::KeyEventKind;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    #[test]
    fn empty_input() {
        let input = TextInput::new();
        assert!(input.value().is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn with_value_puts_cursor_at_end() {
        let input = TextInput::new().with_value("hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn set_value_clamps_cursor() {
        let mut input = TextInput::new().with_value("hello world");
        input.set_value("hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = TextInput::new();
        for c in "1000".chars() {
            assert!(input.handle_event(&press(KeyCode::Char(c))));
        }
        assert_eq!(input.value(), "1000");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn insert_mid_value() {
        let mut input = TextInput::new().with_value("ac");
        input.handle_event(&press(KeyCode::Left));
        input.handle_event(&press(KeyCode::Char('b')));
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn max_length_is_enforced() {
        let mut input = TextInput::new().with_max_length(3);
        for c in "abcdef".chars() {
            input.handle_event(&press(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_deletes_previous_cluster() {
        let mut input = TextInput::new().with_value("café");
        input.handle_event(&press(KeyCode::Backspace));
        assert_eq!(input.value(), "caf");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut input = TextInput::new().with_value("ab");
        input.handle_event(&press(KeyCode::Home));
        input.handle_event(&press(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn delete_removes_cluster_under_cursor() {
        let mut input = TextInput::new().with_value("abc");
        input.handle_event(&press(KeyCode::Home));
        input.handle_event(&press(KeyCode::Delete));
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn cursor_movement_stays_in_bounds() {
        let mut input = TextInput::new().with_value("hi");
        input.handle_event(&press(KeyCode::Right));
        assert_eq!(input.cursor(), 2);
        input.handle_event(&press(KeyCode::Home));
        input.handle_event(&press(KeyCode::Left));
        assert_eq!(input.cursor(), 0);
        input.handle_event(&press(KeyCode::End));
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn rupee_sign_is_one_cursor_step() {
        // U+0930 U+0942 is a single cluster.
        let mut input = TextInput::new().with_value("\u{0930}\u{0942}100");
        assert_eq!(input.cursor(), 4);
        input.handle_event(&press(KeyCode::Home));
        input.handle_event(&press(KeyCode::Right));
        assert_eq!(input.cursor(), 1);
        input.handle_event(&press(KeyCode::Delete));
        input.handle_event(&press(KeyCode::Delete));
        input.handle_event(&press(KeyCode::Delete));
        assert_eq!(input.value(), "\u{0930}\u{0942}");
    }

    #[test]
    fn paste_is_flattened_and_sanitized() {
        let mut input = TextInput::new();
        assert!(input.handle_event(&Event::Paste("12\n34\t5\u{7}6".into())));
        assert_eq!(input.value(), "12 34 56");
    }

    #[test]
    fn paste_respects_max_length() {
        let mut input = TextInput::new().with_max_length(4);
        input.handle_event(&Event::Paste("123456".into()));
        assert_eq!(input.value(), "1234");
    }

    #[test]
    fn control_chars_are_rejected() {
        let mut input = TextInput::new();
        input.handle_event(&press(KeyCode::Char('\u{1b}')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn ctrl_modified_keys_are_left_to_the_caller() {
        let mut input = TextInput::new();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL));
        assert!(!input.handle_event(&ev));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn enter_and_tab_are_left_to_the_caller() {
        let mut input = TextInput::new().with_value("5");
        assert!(!input.handle_event(&press(KeyCode::Enter)));
        assert!(!input.handle_event(&press(KeyCode::Tab)));
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut input = TextInput::new();
        let mut key = KeyEvent::new(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        assert!(!input.handle_event(&Event::Key(key)));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn renders_value() {
        let input = TextInput::new().with_value("1000");
        let mut frame = Frame::new(10, 1);
        input.render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(frame.buffer.to_lines()[0], "1000");
    }

    #[test]
    fn renders_placeholder_only_while_empty() {
        let mut input = TextInput::new().with_placeholder("Enter amount");
        let mut frame = Frame::new(14, 1);
        input.render(Rect::new(0, 0, 14, 1), &mut frame);
        assert_eq!(frame.buffer.to_lines()[0], "Enter amount");

        input.handle_event(&press(KeyCode::Char('5')));
        let mut frame = Frame::new(14, 1);
        input.render(Rect::new(0, 0, 14, 1), &mut frame);
        assert_eq!(frame.buffer.to_lines()[0], "5");
    }

    #[test]
    fn focused_input_reports_frame_cursor() {
        let input = TextInput::new().with_value("12").with_focused(true);
        let mut frame = Frame::new(10, 1);
        input.render(Rect::new(2, 0, 6, 1), &mut frame);
        assert_eq!(frame.cursor(), Some((4, 0)));
        assert!(frame.cursor_visible());
    }

    #[test]
    fn unfocused_input_reports_no_cursor() {
        let input = TextInput::new().with_value("12");
        let mut frame = Frame::new(10, 1);
        input.render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(frame.cursor(), None);
    }

    #[test]
    fn long_value_scrolls_to_keep_cursor_visible() {
        let input = TextInput::new().with_value("abcdefgh").with_focused(true);
        let mut frame = Frame::new(5, 1);
        input.render(Rect::new(0, 0, 5, 1), &mut frame);
        assert_eq!(frame.buffer.to_lines()[0], "efgh");
        assert_eq!(frame.cursor(), Some((4, 0)));
    }

    #[test]
    fn scroll_never_splits_a_wide_cluster() {
        let input = TextInput::new().with_value("世a").with_focused(true);
        let mut frame = Frame::new(3, 1);
        input.render(Rect::new(0, 0, 3, 1), &mut frame);
        // Snapping back to the cluster start keeps it whole.
        assert_eq!(frame.buffer.to_lines()[0], "世a");
    }

    #[test]
    fn cursor_cell_is_reverse_video() {
        let input = TextInput::new().with_value("ab").with_focused(true);
        let mut frame = Frame::new(5, 1);
        input.render(Rect::new(0, 0, 5, 1), &mut frame);
        let cell = frame.buffer.get(2, 0).cloned();
        assert!(cell.is_some_and(|c| c.attrs.contains(StyleFlags::REVERSE)));
    }
}
