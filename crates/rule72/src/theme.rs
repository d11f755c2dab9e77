#![forbid(unsafe_code)]

//! Color palette and named styles for the calculator.

use r72_style::{PackedRgba, Style, StyleFlags};

/// Background colors.
pub mod bg {
    use super::*;

    pub const DEEP: PackedRgba = PackedRgba::rgb(15, 15, 30);
    pub const CARD: PackedRgba = PackedRgba::rgb(25, 25, 45);
    pub const FIELD: PackedRgba = PackedRgba::rgb(35, 35, 60);
}

/// Foreground / text colors.
pub mod fg {
    use super::*;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(220, 220, 240);
    pub const SECONDARY: PackedRgba = PackedRgba::rgb(180, 180, 210);
    pub const MUTED: PackedRgba = PackedRgba::rgb(120, 120, 150);
}

/// Accent / semantic colors.
pub mod accent {
    use super::*;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(130, 170, 255);
    pub const SUCCESS: PackedRgba = PackedRgba::rgb(80, 220, 140);
    pub const ERROR: PackedRgba = PackedRgba::rgb(255, 100, 100);
}

pub fn backdrop() -> Style {
    Style::new().bg(bg::DEEP)
}

pub fn card() -> Style {
    Style::new().fg(fg::PRIMARY).bg(bg::CARD)
}

pub fn card_border() -> Style {
    Style::new().fg(accent::PRIMARY).bg(bg::CARD)
}

pub fn title() -> Style {
    Style::new().fg(fg::PRIMARY).attrs(StyleFlags::BOLD)
}

pub fn body() -> Style {
    Style::new().fg(fg::SECONDARY)
}

pub fn label() -> Style {
    Style::new().fg(fg::PRIMARY)
}

pub fn input() -> Style {
    Style::new().fg(fg::PRIMARY).bg(bg::FIELD)
}

pub fn placeholder() -> Style {
    Style::new().fg(fg::MUTED).bg(bg::FIELD)
}

pub fn input_border() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn input_border_focused() -> Style {
    Style::new().fg(accent::PRIMARY).attrs(StyleFlags::BOLD)
}

pub fn button() -> Style {
    Style::new().fg(accent::PRIMARY)
}

pub fn button_focused() -> Style {
    Style::new()
        .fg(accent::PRIMARY)
        .attrs(StyleFlags::BOLD | StyleFlags::REVERSE)
}

pub fn lang_active() -> Style {
    Style::new().fg(accent::PRIMARY).attrs(StyleFlags::BOLD)
}

pub fn lang_inactive() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn result() -> Style {
    Style::new().fg(accent::SUCCESS)
}

pub fn result_value() -> Style {
    Style::new().fg(accent::SUCCESS).attrs(StyleFlags::BOLD)
}

pub fn error_style() -> Style {
    Style::new().fg(accent::ERROR).attrs(StyleFlags::BOLD)
}

pub fn status_bar() -> Style {
    Style::new().fg(fg::MUTED)
}
