#![forbid(unsafe_code)]

//! Display width measurement in terminal cells.
//!
//! Widths are computed per extended grapheme cluster (UAX #29) so that
//! combining sequences are measured as the glyph the terminal draws.
//! Devanagari matters here: "रू" is two code points (consonant plus
//! combining vowel sign) but one cluster occupying one cell, and a label
//! like "ब्याज" shapes into fewer visual units than its code point count
//! suggests. Summing per-character widths inside a cluster gives the
//! right answer for that repertoire because combining marks measure zero.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of a single `char` in cells. Control characters measure zero.
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Width of one grapheme cluster in cells.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    UnicodeWidthStr::width(grapheme)
}

/// Total display width of a string in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

/// Iterate over the extended grapheme clusters of a string.
#[inline]
pub fn graphemes(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
}

/// Number of grapheme clusters in a string.
#[inline]
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}
