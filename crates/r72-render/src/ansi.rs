#![forbid(unsafe_code)]

//! ANSI escape sequence emission.
//!
//! Only the sequences the presenter actually needs. Colors are always
//! emitted as 24-bit SGR; a transparent channel falls back to the
//! terminal default (SGR 39/49).

use std::io::{self, Write};

use crate::cell::{PackedRgba, StyleFlags};

/// Begin synchronized update (DEC 2026). Terminals without support
/// ignore it.
pub const SYNC_BEGIN: &str = "\x1b[?2026h";
/// End synchronized update.
pub const SYNC_END: &str = "\x1b[?2026l";
pub const CURSOR_HIDE: &str = "\x1b[?25l";
pub const CURSOR_SHOW: &str = "\x1b[?25h";
pub const SGR_RESET: &str = "\x1b[0m";
/// Erase the whole screen (cursor position unchanged).
pub const CLEAR_ALL: &str = "\x1b[2J";

/// Move the cursor to a zero-based cell position.
pub fn cursor_to(out: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    write!(out, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1)
}

/// Emit the full SGR state for a cell style: reset, then attributes,
/// then colors. Unconditional reset keeps the emitter stateless per
/// style change; the presenter's cache decides when a change is needed.
pub fn sgr(
    out: &mut impl Write,
    attrs: StyleFlags,
    fg: PackedRgba,
    bg: PackedRgba,
) -> io::Result<()> {
    out.write_all(b"\x1b[0")?;
    if attrs.contains(StyleFlags::BOLD) {
        out.write_all(b";1")?;
    }
    if attrs.contains(StyleFlags::DIM) {
        out.write_all(b";2")?;
    }
    if attrs.contains(StyleFlags::ITALIC) {
        out.write_all(b";3")?;
    }
    if attrs.contains(StyleFlags::UNDERLINE) {
        out.write_all(b";4")?;
    }
    if attrs.contains(StyleFlags::BLINK) {
        out.write_all(b";5")?;
    }
    if attrs.contains(StyleFlags::REVERSE) {
        out.write_all(b";7")?;
    }
    if attrs.contains(StyleFlags::HIDDEN) {
        out.write_all(b";8")?;
    }
    if attrs.contains(StyleFlags::STRIKETHROUGH) {
        out.write_all(b";9")?;
    }
    if fg.is_transparent() {
        out.write_all(b";39")?;
    } else {
        write!(out, ";38;2;{};{};{}", fg.r(), fg.g(), fg.b())?;
    }
    if bg.is_transparent() {
        out.write_all(b";49")?;
    } else {
        write!(out, ";48;2;{};{};{}", bg.r(), bg.g(), bg.b())?;
    }
    out.write_all(b"m")
}
