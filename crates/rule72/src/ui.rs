#![forbid(unsafe_code)]

//! The calculator screen: a centered card over a dim backdrop, with a
//! one-line key hint at the bottom.
//!
//! The card is sized from its content. Description and message rows are
//! measured through [`Paragraph::line_count`] at the card's inner width,
//! so a wrapped result never clips and an unwrapped one never leaves a
//! hole.

use r72_core::{Rect, Sides};
use r72_i18n::{Lang, strings};
use r72_layout::{Alignment, Constraint, Flex};
use r72_render::Frame;
use r72_style::StyleFlags;
use r72_text::{Line, Span};
use r72_widgets::{Block, BorderType, Borders, Paragraph, TextInput, Widget, set_style_area};

use crate::app::{CalculatorModel, Focus};
use crate::calc::DisplayMessage;
use crate::theme;

/// Card width on terminals wide enough to hold it.
const CARD_WIDTH: u16 = 62;

pub fn draw(model: &CalculatorModel, frame: &mut Frame) {
    let area = frame.bounds();
    if area.is_empty() {
        return;
    }
    set_style_area(&mut frame.buffer, area, theme::backdrop());

    let rows = Flex::vertical()
        .constraints([Constraint::Min(1), Constraint::Fixed(1)])
        .split(area);
    draw_card(model, frame, rows[0]);
    draw_status_line(frame, rows[1]);
}

fn draw_card(model: &CalculatorModel, frame: &mut Frame, area: Rect) {
    let table = strings(model.lang());

    let width = CARD_WIDTH.min(area.width);
    // Two border columns plus one cell of padding on each side.
    let content_width = width.saturating_sub(4);
    if content_width == 0 {
        return;
    }

    let description = Paragraph::new(table.description)
        .style(theme::body())
        .wrap(true);
    let desc_rows = description.line_count(content_width) as u16;

    let message = message_paragraph(model);
    let message_rows = message
        .as_ref()
        .map_or(1, |p| p.line_count(content_width) as u16);

    let height = 16 + desc_rows + message_rows;
    let card = centered(area, width, height);

    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::card_border())
        .style(theme::card())
        .title(table.title)
        .title_alignment(Alignment::Center);
    let inner = block.inner(card);
    block.render(card, frame);
    if inner.is_empty() {
        return;
    }

    let content = inner.inner(Sides::horizontal(1));
    let chunks = Flex::vertical()
        .constraints([
            Constraint::Fixed(1),         // language bar
            Constraint::Fixed(1),
            Constraint::Fixed(desc_rows), // description
            Constraint::Fixed(1),
            Constraint::Fixed(1),         // amount label
            Constraint::Fixed(3),         // amount input
            Constraint::Fixed(1),         // rate label
            Constraint::Fixed(3),         // rate input
            Constraint::Fixed(1),
            Constraint::Fixed(1),         // calculate button
            Constraint::Fixed(1),
            Constraint::Min(0),           // message area
        ])
        .split(content);

    draw_language_bar(model, frame, chunks[0]);
    description.render(chunks[2], frame);

    Paragraph::new(table.amount_label)
        .style(theme::label())
        .render(chunks[4], frame);
    draw_input(
        model.amount_input(),
        model.focus() == Focus::Amount,
        frame,
        chunks[5],
    );

    Paragraph::new(table.rate_label)
        .style(theme::label())
        .render(chunks[6], frame);
    draw_input(
        model.rate_input(),
        model.focus() == Focus::Rate,
        frame,
        chunks[7],
    );

    draw_button(model, frame, chunks[9]);

    if let Some(paragraph) = message {
        paragraph.render(chunks[11], frame);
    }
}

fn draw_language_bar(model: &CalculatorModel, frame: &mut Frame, area: Rect) {
    let bar_focused = model.focus() == Focus::Language;
    let mut spans = Vec::new();
    for (i, lang) in Lang::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let active = lang == model.lang();
        let text = if active {
            format!("[{}]", lang.native_name())
        } else {
            lang.native_name().to_string()
        };
        let mut style = if active {
            theme::lang_active()
        } else {
            theme::lang_inactive()
        };
        if bar_focused && active {
            style = style.add_attrs(StyleFlags::REVERSE);
        }
        spans.push(Span::styled(text, style));
    }
    Paragraph::new(Line::from_spans(spans))
        .alignment(Alignment::Center)
        .render(area, frame);
}

fn draw_input(input: &TextInput, focused: bool, frame: &mut Frame, area: Rect) {
    let border = if focused {
        theme::input_border_focused()
    } else {
        theme::input_border()
    };
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    let inner = block.inner(area);
    block.render(area, frame);
    if inner.is_empty() {
        return;
    }
    input.render(inner, frame);
}

fn draw_button(model: &CalculatorModel, frame: &mut Frame, area: Rect) {
    let style = if model.focus() == Focus::Calculate {
        theme::button_focused()
    } else {
        theme::button()
    };
    // Styled as a span so the highlight covers the label, not the row.
    let label = format!("[ {} ]", strings(model.lang()).calculate_label);
    Paragraph::new(Line::from_spans(vec![Span::styled(label, style)]))
        .alignment(Alignment::Center)
        .render(area, frame);
}

fn message_paragraph(model: &CalculatorModel) -> Option<Paragraph> {
    let paragraph = match model.message()? {
        DisplayMessage::Result(segments) => {
            let spans = segments
                .iter()
                .map(|segment| {
                    let style = if segment.is_value() {
                        theme::result_value()
                    } else {
                        theme::result()
                    };
                    Span::styled(segment.text().to_string(), style)
                })
                .collect();
            Paragraph::new(Line::from_spans(spans)).wrap(true)
        }
        DisplayMessage::Error(text) => Paragraph::new(*text).style(theme::error_style()).wrap(true),
    };
    Some(paragraph)
}

fn draw_status_line(frame: &mut Frame, area: Rect) {
    Paragraph::new(
        "Tab focus \u{b7} \u{2190}/\u{2192} language \u{b7} Enter calculate \u{b7} Esc quit",
    )
    .style(theme::status_bar())
    .alignment(Alignment::Center)
    .render(area, frame);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
