#![forbid(unsafe_code)]

//! Styled text: spans, lines, and width-aware wrapping.
//!
//! A [`Span`] is a run of text with an optional style, a [`Line`] is a
//! sequence of spans, and a [`Text`] is a sequence of lines. The wrap
//! module re-flows lines to a cell width without losing span styling,
//! which is what keeps emphasized values emphasized when a message
//! wraps.

pub mod text;
pub mod wrap;

pub use text::{Line, Span, Text};
pub use wrap::wrap_line;
